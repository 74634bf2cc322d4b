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

use std::io::{self, Read, Write};

use log::{debug, info};
use snafu::ResultExt;

use crate::errors::{DumpError, ReadSnafu, SkipSnafu, WriteSnafu};

/// Size of the iNES header found at the start of `.nes` ROM images.
pub const INES_HEADER_SIZE: u64 = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
    /// Number of leading bytes discarded before conversion starts.
    pub skip: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Bytes actually discarded. Less than the requested skip on short inputs.
    pub skipped: u64,
    /// Lines written, one per converted byte.
    pub lines: u64,
}

/// Renders a byte as two uppercase hex digits.
pub fn encode_byte(byte: u8) -> String {
    hex::encode_upper([byte])
}

/// Writes the text line for a single byte.
pub fn write_line<W: Write>(w: &mut W, byte: u8) -> Result<(), io::Error> {
    w.write_all(encode_byte(byte).as_bytes())?;
    writeln!(w)
}

/// Streams `reader` into `writer`, one hex line per byte, until end of input.
///
/// The first `options.skip` bytes are discarded. Nothing is buffered here
/// beyond the line being written: wrap unbuffered sources and sinks in
/// `BufReader`/`BufWriter`.
///
/// On a read failure the lines already produced are flushed and the error
/// reports the absolute offset of the byte that could not be read.
pub fn dump<R: Read, W: Write>(
    mut reader: R,
    writer: &mut W,
    options: &DumpOptions,
) -> Result<DumpSummary, DumpError> {
    let mut summary = DumpSummary::default();

    if options.skip > 0 {
        summary.skipped = io::copy(&mut reader.by_ref().take(options.skip), &mut io::sink())
            .context(SkipSnafu)?;
        debug!("Skipped {} of {} leading bytes", summary.skipped, options.skip);
    }

    for byte in reader.bytes() {
        let offset = summary.skipped + summary.lines;
        let byte = match byte {
            Ok(byte) => byte,
            Err(source) => {
                // Keep what was already converted; the read error is the one reported.
                if let Err(e) = writer.flush() {
                    debug!("Failed to flush output after read error: {e}");
                }
                return Err(source).context(ReadSnafu { offset });
            }
        };
        write_line(writer, byte).context(WriteSnafu { offset })?;
        summary.lines += 1;
    }

    let offset = summary.skipped + summary.lines;
    writer.flush().context(WriteSnafu { offset })?;

    info!("Converted {} bytes", summary.lines);
    Ok(summary)
}

/// Builder over [`dump`] for callers that configure the conversion up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexDumper {
    options: DumpOptions,
}

impl HexDumper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DumpOptions) -> Self {
        Self { options }
    }

    /// Discard the first `bytes` bytes of the input.
    pub fn skip(mut self, bytes: u64) -> Self {
        self.options.skip = bytes;
        self
    }

    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    pub fn run<R: Read, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
    ) -> Result<DumpSummary, DumpError> {
        dump(reader, writer, &self.options)
    }
}
