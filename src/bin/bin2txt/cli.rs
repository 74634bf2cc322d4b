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

use bin2txt::{DumpOptions, INES_HEADER_SIZE};
use clap::Parser;

/// Dump a binary file as text, one uppercase hex byte per line.
///
/// Output goes to stdout unless --output is given:
/// `bin2txt rom.bin > rom.txt`
#[derive(Parser, Debug)]
#[command(name = "bin2txt", version, about)]
pub struct Cli {
    /// Binary file to convert
    pub input: PathBuf,

    /// Discard this many leading bytes before converting
    #[arg(short, long, value_name = "BYTES", default_value_t = 0)]
    pub skip: u64,

    /// Discard the 16 byte iNES header of a .nes ROM image
    #[arg(long, conflicts_with = "skip")]
    pub ines: bool,

    /// Write the dump to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn dump_options(&self) -> DumpOptions {
        let skip = if self.ines { INES_HEADER_SIZE } else { self.skip };
        DumpOptions { skip }
    }
}
