pub fn remove_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url[..url.len() - 1].to_string()
    } else {
        url.to_string()
    }
}

/// Re-run `f` until it produces a value, spending at most `attempts` extra
/// tries after the first. `Ok(None)` from `f` means "inconsistent read, try
/// again"; a hard error aborts immediately. Returns `Ok(None)` once the
/// budget is exhausted so the caller decides what exhaustion means.
pub async fn retry<T, E, F, Fut>(mut attempts: u32, mut f: F) -> Result<Option<T>, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<Option<T>, E>>,
{
    loop {
        match f().await? {
            Some(value) => return Ok(Some(value)),
            None if attempts == 0 => return Ok(None),
            None => attempts -= 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn trailing_slash() {
        assert_eq!(
            remove_trailing_slash("http://localhost:8545/"),
            "http://localhost:8545"
        );
        assert_eq!(
            remove_trailing_slash("http://localhost:8545"),
            "http://localhost:8545"
        );
    }

    #[tokio::test]
    async fn retry_returns_first_value() {
        let calls = AtomicU32::new(0);
        let result: Result<Option<u32>, anyhow::Error> = retry(3, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(42))
        })
        .await;
        assert_eq!(result.unwrap(), Some(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retry_spends_budget_then_gives_up() {
        let calls = AtomicU32::new(0);
        let result: Result<Option<u32>, anyhow::Error> = retry(2, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        })
        .await;
        assert_eq!(result.unwrap(), None);
        // initial try plus two retries
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_recovers_midway() {
        let calls = AtomicU32::new(0);
        let result: Result<Option<u32>, anyhow::Error> = retry(5, || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Ok(None)
            } else {
                Ok(Some(7))
            }
        })
        .await;
        assert_eq!(result.unwrap(), Some(7));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_aborts_on_hard_error() {
        let calls = AtomicU32::new(0);
        let result: Result<Option<u32>, anyhow::Error> = retry(5, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(anyhow::anyhow!("boom"))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
