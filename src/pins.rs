//! GPIO / peripheral pin assignments for the ContiSense probe board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Continuity sense input
// ---------------------------------------------------------------------------

/// Digital input for the continuity probe, internal pull-up enabled.
/// LOW = probe tips shorted (continuity), HIGH = circuit open.
pub const CONTINUITY_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Report UART (verdict stream to the host)
// ---------------------------------------------------------------------------

/// UART1 TX — carries the `0`/`1` verdict lines.  Kept separate from the
/// UART0 console so log output never interleaves with the line protocol.
pub const REPORT_UART_TX_GPIO: i32 = 17;
/// UART1 RX — unused by the protocol but claimed alongside TX.
pub const REPORT_UART_RX_GPIO: i32 = 18;

/// Symbol rate the host expects on the report UART.
pub const REPORT_UART_BAUD: u32 = 9600;

/// ESP-IDF UART port number for the report stream (UART0 is the console).
pub const REPORT_UART_PORT: i32 = 1;
