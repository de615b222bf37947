// Blocking-query watches
//
// Consul long-polls are driven by feeding the last seen index back into the
// next request. `watch` wraps that loop into a `Stream`.

use std::future::Future;

use futures::{Stream, stream};

use crate::{error::Result, model::Indexed};

struct WatchState<F> {
    index: u64,
    fetch: F,
    done: bool,
}

/// Stream every change of a blocking query.
///
/// `fetch` receives the index to block on (`start` first). Results whose
/// index equals the requested one are timeouts without a change and are
/// skipped. The stream ends after yielding the first error.
pub fn watch<T, F, Fut>(start: u64, fetch: F) -> impl Stream<Item = Result<Indexed<T>>>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<Indexed<T>>>,
{
    let state = WatchState {
        index: start,
        fetch,
        done: false,
    };

    stream::unfold(state, |mut state| async move {
        if state.done {
            return None;
        }

        loop {
            match (state.fetch)(state.index).await {
                Ok(result) if result.index == state.index && state.index != 0 => continue,
                Ok(result) => {
                    // A lower index means the server state was reset; follow it.
                    state.index = result.index;
                    return Some((Ok(result), state));
                }
                Err(e) => {
                    state.done = true;
                    return Some((Err(e), state));
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use futures::StreamExt;

    use super::*;
    use crate::error::ConsulError;

    fn scripted(
        replies: Vec<Result<Indexed<&'static str>>>,
    ) -> (
        Arc<Mutex<Vec<u64>>>,
        impl FnMut(u64) -> futures::future::Ready<Result<Indexed<&'static str>>>,
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut replies: VecDeque<_> = replies.into();
        let log = seen.clone();
        let fetch = move |index| {
            log.lock().unwrap().push(index);
            futures::future::ready(replies.pop_front().unwrap_or_else(|| {
                Err(ConsulError::Decode("script exhausted".to_string()))
            }))
        };
        (seen, fetch)
    }

    #[tokio::test]
    async fn test_watch_skips_unchanged_index() {
        let (seen, fetch) = scripted(vec![
            Ok(Indexed::new(5, "a")),
            Ok(Indexed::new(5, "a")),
            Ok(Indexed::new(9, "b")),
        ]);

        let items: Vec<_> = watch(0, fetch).take(2).collect().await;
        let values: Vec<_> = items.into_iter().map(|r| r.unwrap().into_parts()).collect();

        assert_eq!(values, vec![(5, "a"), (9, "b")]);
        assert_eq!(*seen.lock().unwrap(), vec![0, 5, 5]);
    }

    #[tokio::test]
    async fn test_watch_ends_after_error() {
        let (_, fetch) = scripted(vec![
            Ok(Indexed::new(3, "a")),
            Err(ConsulError::AclPermissionDenied("denied".to_string())),
            Ok(Indexed::new(4, "never")),
        ]);

        let items: Vec<_> = watch(0, fetch).collect().await;
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(ConsulError::AclPermissionDenied(_))));
    }

    #[tokio::test]
    async fn test_watch_follows_index_reset() {
        let (seen, fetch) = scripted(vec![
            Ok(Indexed::new(10, "a")),
            Ok(Indexed::new(2, "reset")),
            Ok(Indexed::new(3, "c")),
        ]);

        let items: Vec<_> = watch(0, fetch).take(3).collect().await;
        assert_eq!(items.len(), 3);
        assert_eq!(*seen.lock().unwrap(), vec![0, 10, 2]);
    }
}
