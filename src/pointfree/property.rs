//! Keyed lookup: `prop` and `safe_prop`.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::control::Maybe;

/// A container whose entries can be read by key.
///
/// Values are returned owned so the result can flow into a wrapper.
pub trait Lookup<K> {
    /// The type of a looked-up value.
    type Value;

    /// The value stored under `key`, if any.
    fn lookup(&self, key: &K) -> Option<Self::Value>;
}

impl<K, V, S> Lookup<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<'a, V, S> Lookup<&'a str> for HashMap<String, V, S>
where
    V: Clone,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &&'a str) -> Option<V> {
        self.get(*key).cloned()
    }
}

impl<K: Ord, V: Clone> Lookup<K> for BTreeMap<K, V> {
    type Value = V;

    fn lookup(&self, key: &K) -> Option<V> {
        self.get(key).cloned()
    }
}

impl<'a, V: Clone> Lookup<&'a str> for BTreeMap<String, V> {
    type Value = V;

    fn lookup(&self, key: &&'a str) -> Option<V> {
        self.get(*key).cloned()
    }
}

impl<K, T> Lookup<K> for &T
where
    T: Lookup<K> + ?Sized,
{
    type Value = T::Value;

    fn lookup(&self, key: &K) -> Option<T::Value> {
        (**self).lookup(key)
    }
}

#[cfg(feature = "json")]
impl<'a> Lookup<&'a str> for serde_json::Value {
    type Value = Self;

    /// A missing or `null` member, or a value that is not an object, gives
    /// `None`.
    fn lookup(&self, key: &&'a str) -> Option<Self> {
        self.get(*key).filter(|value| !value.is_null()).cloned()
    }
}

#[cfg(feature = "json")]
impl Lookup<usize> for serde_json::Value {
    type Value = Self;

    /// An out-of-range or `null` element gives `None`.
    fn lookup(&self, key: &usize) -> Option<Self> {
        self.get(*key).filter(|value| !value.is_null()).cloned()
    }
}

/// `prop(key)(object)` reads `key` from `object`.
///
/// # Examples
///
/// ```rust
/// use adequate::pointfree::prop;
/// use std::collections::HashMap;
///
/// let user = HashMap::from([("name".to_string(), "Albert".to_string())]);
/// assert_eq!(prop("name")(&user), Some("Albert".to_string()));
/// assert_eq!(prop("email")(&user), None);
/// ```
pub fn prop<K, O>(key: K) -> impl Fn(O) -> Option<O::Value>
where
    O: Lookup<K>,
{
    move |object| object.lookup(&key)
}

/// `prop` wrapped in [`Maybe`], so a missing key short-circuits later steps.
///
/// # Examples
///
/// ```rust
/// use adequate::control::Maybe;
/// use adequate::pointfree::{map, safe_prop};
/// use std::collections::HashMap;
///
/// let scores = HashMap::from([("ada", 3)]);
/// let doubled = |name: &'static str| map(|score: i32| score * 2)(safe_prop(name)(&scores));
/// assert_eq!(doubled("ada"), Maybe::of(6));
/// assert!(doubled("bob").is_nothing());
/// ```
pub fn safe_prop<K, O>(key: K) -> impl Fn(O) -> Maybe<O::Value>
where
    O: Lookup<K>,
{
    let read = prop(key);
    move |object| Maybe::from_option(read(object))
}
