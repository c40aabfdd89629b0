/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod client;
pub mod errors;
mod multipart;
pub mod oauth;
pub mod request;
pub mod response;
mod sign;

pub use client::*;
pub use errors::*;
pub use oauth::*;
pub use request::*;
pub use response::*;
