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

use snafu::Snafu;

/// The dump error type
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DumpError {
    /// Reading the header bytes to discard failed.
    #[snafu(display("Failed to skip leading bytes: {source}"))]
    Skip { source: std::io::Error },

    /// Reading the byte at `offset` failed for a reason other than end of input.
    #[snafu(display("Failed to read byte at offset {offset}: {source}"))]
    Read {
        offset: u64,
        source: std::io::Error,
    },

    /// Writing the line for the byte at `offset` failed.
    #[snafu(display("Failed to write line for byte at offset {offset}: {source}"))]
    Write {
        offset: u64,
        source: std::io::Error,
    },
}

impl DumpError {
    /// Absolute input offset the failure refers to, if any.
    pub fn offset(&self) -> Option<u64> {
        match self {
            DumpError::Skip { .. } => None,
            DumpError::Read { offset, .. } | DumpError::Write { offset, .. } => Some(*offset),
        }
    }
}
