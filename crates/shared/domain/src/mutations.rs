use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// The visual mutations a transition performs on its two regions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Mutations: u8 {
        /// Hide marker added to the welcome slide.
        const HIDE_WELCOME = 1 << 0;
        /// Welcome slide removed from layout (`display: none`).
        const COLLAPSE_WELCOME = 1 << 1;
        /// Show marker added to the login panel.
        const SHOW_LOGIN = 1 << 2;

        const WELCOME = Self::HIDE_WELCOME.bits() | Self::COLLAPSE_WELCOME.bits();
        const ALL = Self::WELCOME.bits() | Self::SHOW_LOGIN.bits();
    }
}

impl From<u8> for Mutations {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for Mutations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Mutations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
