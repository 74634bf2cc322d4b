// Copyright 2024, The Horizen Foundation
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use bin2txt::DumpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Error opening file '{}'.", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file '{}'.", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error converting file '{}': {source}", path.display())]
    Dump {
        path: PathBuf,
        #[source]
        source: DumpError,
    },
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }

    /// Prints the message to `w`. The sink may be the stdout that just failed,
    /// so a failure here is dropped and the exit status still applies.
    pub fn report<W: Write>(&self, w: &mut W) {
        let _ = writeln!(w, "{self}");
    }
}
