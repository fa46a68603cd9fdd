//! Parameter values extracted from, or filled into, topic wildcards

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;

/// Value bound to a named wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
	/// One topic level, bound by `+name`
	Single(String),
	/// Zero or more trailing topic levels, bound by `#name`
	Multi(Vec<String>),
}

impl ParamValue {
	/// Returns the single level, if this is a `Single` value.
	pub fn as_single(&self) -> Option<&str> {
		match self {
			| ParamValue::Single(s) => Some(s),
			| ParamValue::Multi(_) => None,
		}
	}

	/// Returns the levels, if this is a `Multi` value.
	pub fn as_multi(&self) -> Option<&[String]> {
		match self {
			| ParamValue::Multi(levels) => Some(levels),
			| ParamValue::Single(_) => None,
		}
	}

	/// Returns the shape of this value.
	pub fn kind(&self) -> ParamKind {
		match self {
			| ParamValue::Single(_) => ParamKind::Single,
			| ParamValue::Multi(_) => ParamKind::Multi,
		}
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::Single(value.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		ParamValue::Single(value)
	}
}

impl From<Vec<String>> for ParamValue {
	fn from(levels: Vec<String>) -> Self {
		ParamValue::Multi(levels)
	}
}

impl From<Vec<&str>> for ParamValue {
	fn from(levels: Vec<&str>) -> Self {
		ParamValue::Multi(levels.into_iter().map(str::to_string).collect())
	}
}

impl<const N: usize> From<[&str; N]> for ParamValue {
	fn from(levels: [&str; N]) -> Self {
		ParamValue::Multi(levels.iter().map(|s| s.to_string()).collect())
	}
}

/// Joins multi-level values with `,` so a mis-shaped value still renders
/// as a single level.
impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			| ParamValue::Single(s) => f.write_str(s),
			| ParamValue::Multi(levels) => f.write_str(&levels.join(",")),
		}
	}
}

/// Shape of a wildcard parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
	/// Bound by a single-level wildcard
	Single,
	/// Bound by a multi-level wildcard
	Multi,
}

impl fmt::Display for ParamKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			| ParamKind::Single => f.write_str("single-level"),
			| ParamKind::Multi => f.write_str("multi-level"),
		}
	}
}

/// Mapping from parameter name to its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TopicParams {
	values: HashMap<String, ParamValue>,
}

impl TopicParams {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `name`, replacing any previous value.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		value: impl Into<ParamValue>,
	) -> Option<ParamValue> {
		self.values.insert(name.into(), value.into())
	}

	/// Builder form of [`insert`](Self::insert).
	pub fn with(
		mut self,
		name: impl Into<String>,
		value: impl Into<ParamValue>,
	) -> Self {
		self.insert(name, value);
		self
	}

	/// Returns the value bound to `name`.
	pub fn get(&self, name: &str) -> Option<&ParamValue> {
		self.values.get(name)
	}

	/// Returns the value of `name` if it was bound by a `+` wildcard.
	pub fn single(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(ParamValue::as_single)
	}

	/// Returns the value of `name` if it was bound by a `#` wildcard.
	pub fn multi(&self, name: &str) -> Option<&[String]> {
		self.get(name).and_then(ParamValue::as_multi)
	}

	/// Removes the binding of `name`.
	pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
		self.values.remove(name)
	}

	/// Returns true if `name` is bound.
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Returns number of bound parameters.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if nothing is bound.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Returns iterator over bindings, in no particular order.
	pub fn iter(&self) -> hash_map::Iter<'_, String, ParamValue> {
		self.values.iter()
	}
}

impl<K, V> FromIterator<(K, V)> for TopicParams
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = TopicParams::new();
		for (name, value) in iter {
			params.insert(name, value);
		}
		params
	}
}

impl<'a> IntoIterator for &'a TopicParams {
	type Item = (&'a String, &'a ParamValue);
	type IntoIter = hash_map::Iter<'a, String, ParamValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}

impl IntoIterator for TopicParams {
	type Item = (String, ParamValue);
	type IntoIter = hash_map::IntoIter<String, ParamValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.into_iter()
	}
}
