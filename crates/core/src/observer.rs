//! Loading observers
//!
//! Observers receive every `LoadingInfo` the engine produces, in
//! registration order. Each notification is a snapshot; later loads of the
//! same URL produce new instances.

use log::{debug, trace};

use crate::info::LoadingInfo;

/// Receives loading status changes
pub trait LoadingObserver: Send + Sync {
    /// Called with each new loading snapshot
    fn loading_changed(&self, info: &LoadingInfo);
}

impl<F> LoadingObserver for F
where
    F: Fn(&LoadingInfo) + Send + Sync,
{
    fn loading_changed(&self, info: &LoadingInfo) {
        self(info)
    }
}

/// Handle returned by [`LoadingObservers::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registered loading observers
#[derive(Default)]
pub struct LoadingObservers {
    observers: Vec<(ObserverId, Box<dyn LoadingObserver>)>,
    next_id: u64,
}

impl LoadingObservers {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer
    pub fn add(&mut self, observer: impl LoadingObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        debug!("Registered loading observer {:?}", id);
        id
    }

    /// Unregister an observer, returning whether it was registered
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        before != self.observers.len()
    }

    /// Hand a snapshot to every observer
    pub fn notify(&self, info: &LoadingInfo) {
        trace!(
            "Loading {} {} -> {} observers",
            info.status(),
            info.url(),
            self.observers.len()
        );
        for (_, observer) in &self.observers {
            observer.loading_changed(info);
        }
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use url::Url;

    use crate::status::LoadStatus;

    fn recorder() -> (Arc<Mutex<Vec<LoadingInfo>>>, impl LoadingObserver) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |info: &LoadingInfo| sink.lock().unwrap().push(info.clone()))
    }

    #[test]
    fn test_empty_registry() {
        let observers = LoadingObservers::new();
        assert!(observers.is_empty());
        observers.notify(&LoadingInfo::started(Url::parse("https://example.com").unwrap()));
    }

    #[test]
    fn test_notify_shares_snapshot() {
        let mut observers = LoadingObservers::new();
        let (first, a) = recorder();
        let (second, b) = recorder();
        observers.add(a);
        observers.add(b);

        let info = LoadingInfo::started(Url::parse("https://example.com").unwrap());
        observers.notify(&info);

        let first = first.lock().unwrap();
        let second = second.lock().unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert!(first[0].shares_data_with(&info));
        assert!(second[0].shares_data_with(&first[0]));
    }

    #[test]
    fn test_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut observers = LoadingObservers::new();
        for n in 0..3 {
            let order = Arc::clone(&order);
            observers.add(move |_: &LoadingInfo| order.lock().unwrap().push(n));
        }

        observers.notify(&LoadingInfo::succeeded(Url::parse("https://example.com").unwrap()));
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_remove() {
        let mut observers = LoadingObservers::new();
        let (seen, observer) = recorder();
        let id = observers.add(observer);

        assert!(observers.remove(id));
        assert!(!observers.remove(id));
        assert!(observers.is_empty());

        observers.notify(&LoadingInfo::stopped(Url::parse("https://example.com").unwrap()));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_each_event_is_a_new_snapshot() {
        let mut observers = LoadingObservers::new();
        let (seen, observer) = recorder();
        observers.add(observer);

        let url = Url::parse("https://example.com").unwrap();
        observers.notify(&LoadingInfo::started(url.clone()));
        observers.notify(&LoadingInfo::succeeded(url));

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].status(), LoadStatus::Started);
        assert_eq!(seen[1].status(), LoadStatus::Succeeded);
        assert!(!seen[0].shares_data_with(&seen[1]));
    }
}
