//! Process-wide client slot for the browser context.

use std::sync::RwLock;

use sessionkit_core::Client;

/// Holder for the shared browser-context client.
///
/// Uninitialized at process start, populated on the first window-present
/// factory call, never torn down within the process lifetime. Window-less
/// passes bypass the slot entirely so a server-rendering pass cannot
/// poison the page-lifetime client.
pub(crate) struct SharedClientSlot {
    slot: RwLock<Option<Client>>,
}

/// The one slot backing [`create_browser_client`](crate::create_browser_client).
pub(crate) static SHARED_CLIENT: SharedClientSlot = SharedClientSlot::new();

impl SharedClientSlot {
    pub(crate) const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    pub(crate) fn get(&self) -> Option<Client> {
        self.slot
            .read()
            .expect("RwLock should not be poisoned")
            .clone()
    }

    pub(crate) fn store(&self, client: Client) {
        *self.slot.write().expect("RwLock should not be poisoned") = Some(client);
    }
}
