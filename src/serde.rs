use crate::UnscaledDecimal128;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The wire form is the packed 16-byte layout itself. Deserialization
/// revalidates: a stored negative zero is canonicalized and a magnitude
/// beyond 10^38 - 1 is rejected.
impl Serialize for UnscaledDecimal128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UnscaledDecimal128 {
    fn deserialize<D>(deserializer: D) -> Result<UnscaledDecimal128, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <[u8; 16]>::deserialize(deserializer)?;
        UnscaledDecimal128::try_from_bytes(bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use crate::UnscaledDecimal128;

    #[test]
    fn wire_round_trip() {
        for value in [0i64, 1, -1, i64::MAX, i64::MIN] {
            let decimal = UnscaledDecimal128::from(value);
            let encoded = serde_json::to_string(&decimal).unwrap();
            let decoded: UnscaledDecimal128 = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, decimal);
        }
    }

    #[test]
    fn out_of_range_magnitude_is_rejected() {
        let mut bytes = [0xFFu8; 16];
        bytes[15] = 0x7F;
        let encoded = serde_json::to_string(&bytes).unwrap();
        assert!(serde_json::from_str::<UnscaledDecimal128>(&encoded).is_err());
    }
}
