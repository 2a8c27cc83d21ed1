//! Conversions at the serialization boundary.
//!
//! An absent option is represented as a JSON `null`, and a `null` is read
//! back as an absent option. A present option holding something which
//! serializes to `null` therefore comes back absent.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned};
use serde::ser;
use serde_json::Value;

use crate::option::{none, some, Option};

impl<T> Option<T> {
    /// Construct an option from a JSON value.
    ///
    /// `null` produces an absent option, anything else is deserialized into
    /// `T` and wrapped in a present option.
    ///
    /// ```
    /// use optional::{none, some, Option};
    /// use serde_json::json;
    ///
    /// assert_eq!(Option::<u32>::from_json(json!(1))?, some(1));
    /// assert_eq!(Option::<u32>::from_json(json!(null))?, none());
    /// # Ok::<_, serde_json::Error>(())
    /// ```
    pub fn from_json(json: Value) -> Result<Self, serde_json::Error>
    where
        T: DeserializeOwned,
    {
        if json.is_null() {
            return Ok(none());
        }

        Ok(some(serde_json::from_value(json)?))
    }

    /// Convert into a JSON value, producing `null` if absent.
    pub fn to_json(&self) -> Result<Value, serde_json::Error>
    where
        T: ser::Serialize,
    {
        serde_json::to_value(self)
    }
}

impl<T> ser::Serialize for Option<T>
where
    T: ser::Serialize,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self.as_ref().into_nullable() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> de::Deserialize<'de> for Option<T>
where
    T: de::Deserialize<'de>,
{
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_option(Visitor(PhantomData))
    }
}

struct Visitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for Visitor<T>
where
    T: de::Deserialize<'de>,
{
    type Value = Option<T>;

    #[inline]
    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an optional value")
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(none())
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(none())
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        Ok(some(T::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};

    use crate::{none, some, Option};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Episode {
        name: Option<String>,
        number: u32,
    }

    #[test]
    fn test_to_json() {
        assert_eq!(some(json!({})).to_json().unwrap(), json!({}));
        assert_eq!(some(1u32).to_json().unwrap(), json!(1));
        assert_eq!(none::<u32>().to_json().unwrap(), Value::Null);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Option::<u32>::from_json(json!(1)).unwrap(), some(1));
        assert_eq!(Option::<u32>::from_json(Value::Null).unwrap(), none());
        assert!(Option::<u32>::from_json(json!("one")).is_err());
    }

    #[test]
    fn test_round_trip() {
        let value = some(json!({"title": "Severance"}));
        assert_eq!(Option::from_json(value.to_json().unwrap()).unwrap(), value);

        let value = none::<Value>();
        assert_eq!(Option::from_json(value.to_json().unwrap()).unwrap(), value);
    }

    #[test]
    fn test_round_trip_present_null_is_lossy() {
        let value = some(Value::Null);
        assert!(value.is_some());
        let back = Option::<Value>::from_json(value.to_json().unwrap()).unwrap();
        assert_eq!(back, none());
    }

    #[test]
    fn test_embedded_field() {
        let episode = Episode {
            name: some(String::from("Pilot")),
            number: 1,
        };

        let json = serde_json::to_string(&episode).unwrap();
        assert_eq!(json, r#"{"name":"Pilot","number":1}"#);
        assert_eq!(serde_json::from_str::<Episode>(&json).unwrap(), episode);

        let episode = serde_json::from_str::<Episode>(r#"{"name":null,"number":2}"#).unwrap();
        assert_eq!(episode.name, none());
    }
}
