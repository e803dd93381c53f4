//! One-shot hardware peripheral initialization.
//!
//! Configures the continuity sense GPIO and the report UART using raw
//! ESP-IDF sys calls.  Called once from `main()` before the sampling
//! loop starts.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    UartConfigFailed(i32),
    UartDriverInstallFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::UartConfigFailed(rc) => write!(f, "UART config failed (rc={})", rc),
            Self::UartDriverInstallFailed(rc) => {
                write!(f, "UART driver install failed (rc={})", rc)
            }
        }
    }
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals(report_baud: u32) -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the sampling loop; single-threaded.
    unsafe {
        init_sense_input()?;
        init_report_uart(report_baud)?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals(_report_baud: u32) -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── Continuity sense GPIO ─────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_sense_input() -> Result<(), HwInitError> {
    // Pull-up input: reads HIGH unless the probe pulls it to ground.
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::CONTINUITY_GPIO,
        mode: gpio_mode_t_GPIO_MODE_INPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::GpioConfigFailed(ret));
    }

    info!(
        "hw_init: sense GPIO{} configured (input, pull-up)",
        pins::CONTINUITY_GPIO
    );
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    (unsafe { gpio_get_level(pin) }) != 0
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(_pin: i32) -> bool {
    true
}

// ── Report UART ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_report_uart(baud: u32) -> Result<(), HwInitError> {
    let uart_cfg = uart_config_t {
        baud_rate: baud as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };
    let ret = unsafe { uart_param_config(pins::REPORT_UART_PORT, &uart_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartConfigFailed(ret));
    }

    let ret = unsafe {
        uart_set_pin(
            pins::REPORT_UART_PORT,
            pins::REPORT_UART_TX_GPIO,
            pins::REPORT_UART_RX_GPIO,
            UART_PIN_NO_CHANGE,
            UART_PIN_NO_CHANGE,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartConfigFailed(ret));
    }

    // TX-only protocol; the RX ring buffer is the minimum the driver accepts.
    let ret = unsafe {
        uart_driver_install(
            pins::REPORT_UART_PORT,
            256,
            0,
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::UartDriverInstallFailed(ret));
    }

    info!(
        "hw_init: report UART{} configured ({} baud, TX=GPIO{})",
        pins::REPORT_UART_PORT,
        baud,
        pins::REPORT_UART_TX_GPIO
    );
    Ok(())
}

/// Blocking write to the report UART.  Returns the number of bytes the
/// driver accepted, or a negative ESP-IDF error code.
#[cfg(target_os = "espidf")]
pub fn uart_write(bytes: &[u8]) -> i32 {
    // SAFETY: uart_driver_install completed in init_report_uart before the
    // sampling loop starts; main-loop only, no concurrent writers.
    unsafe {
        uart_write_bytes(
            pins::REPORT_UART_PORT,
            bytes.as_ptr().cast::<core::ffi::c_void>(),
            bytes.len(),
        )
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn uart_write(bytes: &[u8]) -> i32 {
    bytes.len() as i32
}
