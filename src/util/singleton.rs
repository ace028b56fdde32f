//! Lazily-initialized values shared per type, such as the empty list or an infinite constant stream.

use std::any::Any;
use std::any::TypeId;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static REGISTRY: RefCell<HashMap<(TypeId, TypeId), Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Returns the value registered for the key type `K` and value type `V`, creating it on first use.
///
/// The key type only serves to tell apart singletons of the same value type, and is never instantiated.
/// Values are `Rc`-based and cannot cross threads, so each thread holds its own registry.
/// `init` runs without the registry borrowed, so it may request other singletons. If it requests this
/// same singleton, the first value to finish initializing is the one kept.
pub fn singleton<K, V, F>(init: F) -> V
where
    K: 'static,
    V: Clone + 'static,
    F: FnOnce() -> V,
{
    let key = (TypeId::of::<K>(), TypeId::of::<V>());

    let found = REGISTRY.with(|registry| {
        registry.borrow().get(&key).and_then(|value| value.downcast_ref::<V>()).cloned()
    });

    if let Some(value) = found {
        return value;
    }

    let value = init();

    REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let entry = registry.entry(key).or_insert_with(|| {
            log::debug!("initializing singleton of type {}", std::any::type_name::<V>());
            Box::new(value.clone()) as Box<dyn Any>
        });

        entry.downcast_ref::<V>().cloned().unwrap_or(value)
    })
}
