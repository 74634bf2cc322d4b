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

use std::path::PathBuf;

use bin2txt::{DumpOptions, DumpSummary, HexDumper};
use log::info;

use crate::errors::CliError;
use crate::utils::{in_file, out_file};

pub fn hexdump(
    input: &PathBuf,
    output: &Option<PathBuf>,
    options: DumpOptions,
) -> Result<DumpSummary, CliError> {
    info!("Reading input file: {input:?}");
    let reader = in_file(input)?;

    let mut w = out_file(output.as_ref())?;
    if options.skip > 0 {
        info!("Skipping the first {} bytes", options.skip);
    }

    HexDumper::with_options(options)
        .run(reader, &mut w)
        .map_err(|source| CliError::Dump {
            path: input.clone(),
            source,
        })
}
