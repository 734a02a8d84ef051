//! A length, mass, and temperature conversion engine and the service that
//! exposes it over a line-oriented text protocol.
//!
//! ## Text Protocol
//!
//! The service prints `READY` once at startup, then answers one request
//! per line read from standard input:
//!
//! ```text
//! <request_id> <value> <from_unit> <to_unit>
//! ```
//!
//! A successful conversion is answered with `<request_id> <result>`, the
//! result carrying ten digits after the decimal point. A failed one is
//! answered with `<request_id> ERROR <message>`. Blank lines are skipped.
//! Every response is flushed as soon as it is written.

// This file is part of unit-converter.
//
// unit-converter is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// unit-converter is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#![deny(clippy::panic)]

pub mod category;
pub mod convert;
pub mod protocol;
pub mod units;
pub mod utils;

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the unit-converter project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";
