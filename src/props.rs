//! Loose key/value properties with per-entry visibility.
//!
//! Entries are either enumerable (listed by [`Properties::iter`] and serialized) or
//! non-enumerable (reachable through [`Properties::get`] only). Non-enumerable entries let a
//! caller attach helper values to a config or options object without them leaking into the
//! serialized request.

// crates.io
use serde::{Deserializer, Serializer, ser::SerializeMap};
// self
use crate::_prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Property {
	value: Value,
	enumerable: bool,
}

/// Ordered property bag keyed by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Properties(BTreeMap<String, Property>);
impl Properties {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts (or replaces) an enumerable entry, returning the previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.0
			.insert(key.into(), Property { value: value.into(), enumerable: true })
			.map(|p| p.value)
	}

	/// Looks up an entry regardless of its visibility.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key).map(|p| &p.value)
	}

	/// Returns a mutable handle to an entry; every entry is writable.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
		self.0.get_mut(key).map(|p| &mut p.value)
	}

	/// Returns `true` if the entry exists and is enumerable.
	pub fn is_enumerable(&self, key: &str) -> bool {
		self.0.get(key).is_some_and(|p| p.enumerable)
	}

	/// Returns `true` if an entry exists under `key`, visible or not.
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Removes an entry regardless of its visibility; every entry is configurable.
	pub fn remove(&mut self, key: &str) -> Option<Value> {
		self.0.remove(key).map(|p| p.value)
	}

	/// Drops every entry whose key fails `keep`.
	pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
		self.0.retain(|k, _| keep(k.as_str()));
	}

	/// Iterates enumerable entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().filter(|(_, p)| p.enumerable).map(|(k, p)| (k.as_str(), &p.value))
	}

	/// Iterates enumerable keys in key order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.iter().map(|(k, _)| k)
	}

	/// Number of enumerable entries.
	pub fn len(&self) -> usize {
		self.iter().count()
	}

	/// Returns `true` when no enumerable entries exist.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
impl FromIterator<(String, Value)> for Properties {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (String, Value)>,
	{
		Self(
			iter.into_iter()
				.map(|(k, value)| (k, Property { value, enumerable: true }))
				.collect(),
		)
	}
}
impl Serialize for Properties {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(None)?;

		for (k, v) in self.iter() {
			map.serialize_entry(k, v)?;
		}

		map.end()
	}
}
impl<'de> Deserialize<'de> for Properties {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(Map::<String, Value>::deserialize(deserializer)?.into_iter().collect())
	}
}

/// Defines a non-enumerable, writable, configurable entry named `key` on `receiver`.
///
/// An existing entry under the same name is replaced and becomes non-enumerable.
pub fn define_prop(receiver: &mut Properties, key: impl Into<String>, value: impl Into<Value>) {
	receiver.0.insert(key.into(), Property { value: value.into(), enumerable: false });
}

/// Copies every enumerable entry of `provider` onto `receiver` as non-enumerable entries.
pub fn delegate(receiver: &mut Properties, provider: &Properties) {
	for (k, v) in provider.iter() {
		define_prop(receiver, k, v.clone());
	}
}
