use std::future::Future;

use futures::future::try_join_all;

use crate::api::CheckApi;
use crate::check::model::CheckOutcome;
use crate::error::CheckError;

/// Register a fresh check request with `api` and return the future that
/// settles the run. The API is only touched synchronously, so the returned
/// future holds no borrow of it.
pub fn start_check<A>(api: &A) -> impl Future<Output = Result<CheckOutcome, CheckError>> + 'static
where
    A: CheckApi + ?Sized + 'static,
{
    api.set_current_requests(vec![api.fetch_check()]);
    let promises = api.current_promises();

    async move {
        let responses = try_join_all(promises).await?;
        let first = responses
            .into_iter()
            .next()
            .ok_or(CheckError::EmptyResponse)?;
        CheckOutcome::from_value(first)
    }
}
