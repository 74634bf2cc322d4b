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

use crate::errors::CliError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn in_file(input: &Path) -> Result<BufReader<File>, CliError> {
    File::open(input)
        .map(BufReader::new)
        .map_err(|source| CliError::Open {
            path: input.to_path_buf(),
            source,
        })
}

pub fn out_file(output: Option<&PathBuf>) -> Result<BufWriter<Box<dyn Write>>, CliError> {
    // Attempt to create the file if a path is specified
    let from_path = output
        .map(|p| {
            File::create(p).map_err(|source| CliError::Output {
                path: p.clone(),
                source,
            })
        })
        .transpose()?
        .map(|f| Box::new(f) as Box<dyn Write>);

    // If no path is specified, default to stdout
    let w = from_path.unwrap_or_else(|| Box::new(std::io::stdout().lock()) as Box<dyn Write>);
    Ok(BufWriter::new(w))
}
