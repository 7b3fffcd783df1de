use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Baud rates supported by the hardware modem's UART.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, FromPrimitive)]
pub enum BaudRate {
    /// 115 200 baud.
    #[default]
    B115200 = 115_200,
    /// 57 600 baud.
    B57600 = 57_600,
    /// 9 600 baud.
    B9600 = 9_600,
}

impl From<BaudRate> for u32 {
    fn from(baud_rate: BaudRate) -> Self {
        match baud_rate {
            BaudRate::B115200 => 115_200,
            BaudRate::B57600 => 57_600,
            BaudRate::B9600 => 9_600,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = u32;

    fn try_from(baud_rate: u32) -> Result<Self, Self::Error> {
        Self::from_u32(baud_rate).ok_or(baud_rate)
    }
}

#[cfg(feature = "clap")]
impl clap::ValueEnum for BaudRate {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::B115200, Self::B57600, Self::B9600]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::B115200 => clap::builder::PossibleValue::new("115200"),
            Self::B57600 => clap::builder::PossibleValue::new("57600"),
            Self::B9600 => clap::builder::PossibleValue::new("9600"),
        })
    }
}
