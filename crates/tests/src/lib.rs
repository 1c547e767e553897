#[cfg(test)]
mod common;

#[cfg(test)]
mod list_query_tests;

#[cfg(test)]
mod upload_validation_tests;

#[cfg(test)]
mod upload_tracker_tests;

#[cfg(test)]
mod user_model_tests;

#[cfg(test)]
mod format_tests;

#[cfg(test)]
mod error_message_tests;
