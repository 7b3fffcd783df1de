use std::borrow::Cow;
use std::time::Duration;

use crate::BaudRate;

#[cfg(windows)]
pub use serialport::COMPort as SerialPortImpl;

#[cfg(unix)]
pub use serialport::TTYPort as SerialPortImpl;

/// Read timeout applied to the serial port unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Opens the serial port of a hardware modem depending on the local operating system.
///
/// The port is configured for 8N1 without flow control, which is what the modem's UART expects.
/// Reads that do not complete within `timeout` fail with [`std::io::ErrorKind::TimedOut`].
///
/// # Errors
/// For errors please refer to [`serialport::new()`] and the platform's `open()`.
pub fn open<'a>(
    path: impl Into<Cow<'a, str>>,
    baud_rate: BaudRate,
    timeout: Duration,
) -> serialport::Result<SerialPortImpl> {
    SerialPortImpl::open(
        &serialport::new(path, baud_rate.into())
            .flow_control(serialport::FlowControl::None)
            .timeout(timeout),
    )
}
