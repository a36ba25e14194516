use std::future::Future;

use crate::progress::Progress;

/// Show a spinner while `fut` runs, clearing it on success and leaving
/// `failure` behind on error.
pub async fn with_spinner<T, E, F>(message: &str, failure: &str, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let spinner = Progress::spinner(message);
    let result = fut.await;
    match &result {
        Ok(_) => spinner.finish_clear(),
        Err(_) => spinner.finish_err(failure),
    }
    result
}
