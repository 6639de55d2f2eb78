use super::cancel::CancellationToken;
use super::state::ScreenState;
use crate::api::client::ProductApi;
use crate::api::credentials::CredentialProvider;
use crate::error::TrendzError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetch result was written to the screen state.
    Applied,
    /// The screen was torn down first; the result was dropped.
    Discarded,
}

/// Run the single fetch for a freshly mounted screen.
///
/// Moves the state to InProgress, then to Success or Failure depending on
/// the response. Any error other than an invalid transition ends up as a
/// Failure on the screen rather than being returned.
///
/// `on_change` sees the state just before the request goes out and again
/// once the result is applied. It is not called for a discarded result.
pub async fn load_product<A, C, F>(
    state: &mut ScreenState,
    api: &A,
    credentials: &C,
    id: &str,
    cancel: &CancellationToken,
    mut on_change: F,
) -> Result<LoadOutcome, TrendzError>
where
    A: ProductApi,
    C: CredentialProvider,
    F: FnMut(&ScreenState),
{
    state.begin_fetch()?;

    let token = match credentials.bearer_token() {
        Some(token) => token,
        None => {
            tracing::warn!("No auth token available; skipping request for product {}", id);
            state.fail(TrendzError::MissingToken.failure_kind())?;
            on_change(state);
            return Ok(LoadOutcome::Applied);
        }
    };

    on_change(state);

    let result = tokio::select! {
        result = api.fetch_product(id, &token) => result,
        _ = cancel.cancelled() => {
            tracing::info!("Screen torn down while product {} was loading", id);
            return Ok(LoadOutcome::Discarded);
        }
    };

    if cancel.is_cancelled() {
        tracing::info!("Discarding product {} response for a torn-down screen", id);
        return Ok(LoadOutcome::Discarded);
    }

    match result {
        Ok(details) => {
            let (product, similar) = details.normalize();
            tracing::info!(
                "Loaded product {} with {} similar products",
                product.id,
                similar.len()
            );
            state.succeed(product, similar)?;
        }
        Err(e) => {
            tracing::warn!("Failed to load product {}: {}", id, e);
            state.fail(e.failure_kind())?;
        }
    }

    on_change(state);
    Ok(LoadOutcome::Applied)
}
