// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod http_action_error;
pub use http_action_error::HttpActionError;

mod http_get_action;
pub use http_get_action::{target_url, HttpGetAction};

pub mod cli;
pub use cli::Args;
