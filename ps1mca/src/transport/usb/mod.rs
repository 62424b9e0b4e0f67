// ps1mca/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

//! USB transport for the PlayStation 3 Memory Card Adaptor (054c:02ea).
//!
//! The CECHZM1 is a fixed-function device: interface 0, bulk OUT on 0x02,
//! bulk IN on 0x81. No endpoint discovery is needed.

use crate::constants::{
    BULK_IN_ENDPOINT, BULK_OUT_ENDPOINT, RESPONSE_BUFFER_LEN, USB_PRODUCT_ID, USB_VENDOR_ID,
};
use crate::transport::traits::Transport;
use crate::utils::{ms, DEFAULT_EXCHANGE_TIMEOUT_MS};
use crate::{Error, Result};

use log::{debug, warn};
use rusb::UsbContext;
use rusb::{Context, DeviceHandle};

/// Exclusive handle on the adaptor's bulk interface.
///
/// Dropping the transport releases the interface and, if a kernel driver was
/// detached on open, reattaches it. This runs on every exit path, including
/// aborted write workflows.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    kernel_driver_detached: bool,
    send_timeout_ms: u64,
}

impl UsbTransport {
    /// Open the first adaptor found on the bus and claim interface 0,
    /// detaching a kernel driver first when one is attached.
    pub fn open() -> Result<Self> {
        let ctx = Context::new()?;
        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            if dd.vendor_id() != USB_VENDOR_ID || dd.product_id() != USB_PRODUCT_ID {
                continue;
            }

            let mut handle = device.open()?;

            let mut kernel_driver_detached = false;
            if let Ok(true) = handle.kernel_driver_active(0) {
                handle.detach_kernel_driver(0)?;
                kernel_driver_detached = true;
            }

            handle.claim_interface(0)?;
            debug!(
                "claimed interface 0 on {:04x}:{:04x} (kernel driver detached: {})",
                USB_VENDOR_ID, USB_PRODUCT_ID, kernel_driver_detached
            );

            return Ok(UsbTransport {
                handle,
                kernel_driver_detached,
                send_timeout_ms: DEFAULT_EXCHANGE_TIMEOUT_MS,
            });
        }

        Err(Error::DeviceNotFound)
    }
}

impl Transport for UsbTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let written = self
            .handle
            .write_bulk(BULK_OUT_ENDPOINT, data, ms(self.send_timeout_ms))?;
        if written != data.len() {
            return Err(Error::InvalidLength {
                expected: data.len(),
                actual: written,
            });
        }
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; RESPONSE_BUFFER_LEN];
        let n = self
            .handle
            .read_bulk(BULK_IN_ENDPOINT, &mut buf, ms(timeout_ms))?;
        buf.truncate(n);
        Ok(buf)
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.handle.release_interface(0) {
            warn!("failed to release interface 0: {}", e);
        }
        if self.kernel_driver_detached {
            if let Err(e) = self.handle.attach_kernel_driver(0) {
                warn!("failed to reattach kernel driver: {}", e);
            }
        }
    }
}
