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

//! Line-oriented hex dumps of binary files: one uppercase byte value per line.

pub mod encoder;
pub mod errors;

pub use encoder::{
    dump, encode_byte, write_line, DumpOptions, DumpSummary, HexDumper, INES_HEADER_SIZE,
};
pub use errors::DumpError;
