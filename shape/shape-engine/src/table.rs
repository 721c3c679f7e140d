//! Contract lookup by id and by name.

use crate::contract::Contract;
use crate::id::CallId;
use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;
use log::warn;

/// Where a call id leads.
#[derive(Debug)]
pub enum Dispatch<'t> {
    Known(&'t Contract),
    /// A multiplexer whose opcode has no sub-contract on this release.
    UnknownSecondary {
        primary: &'t Contract,
        id: CallId,
    },
    Unknown(CallId),
}

#[derive(Debug, Default, Clone)]
pub struct ContractTable {
    by_id: BTreeMap<CallId, Contract>,
    by_name: BTreeMap<&'static str, CallId>,
}

impl ContractTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contract. A second contract for an id already present is
    /// dropped with a warning; the first one stays authoritative.
    pub fn insert(&mut self, contract: Contract) -> bool {
        let name = contract.name();
        match self.by_id.entry(contract.id) {
            Entry::Occupied(existing) => {
                warn!(
                    "{name} and {} both resolve to {}; keeping {}",
                    existing.get().name(),
                    contract.id,
                    existing.get().name()
                );
                false
            }
            Entry::Vacant(slot) => {
                self.by_name.insert(name, contract.id);
                slot.insert(contract);
                true
            }
        }
    }

    #[must_use]
    pub fn lookup(&self, id: CallId) -> Option<&Contract> {
        self.by_id.get(&id)
    }

    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<CallId> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn lookup_name(&self, name: &str) -> Option<&Contract> {
        self.id_of(name).and_then(|id| self.lookup(id))
    }

    /// Finds the contract for a call, following a multiplexer's opcode slot
    /// to its sub-contract.
    #[must_use]
    pub fn dispatch(&self, id: CallId, args: &[u64]) -> Dispatch<'_> {
        let Some(contract) = self.lookup(id) else {
            return Dispatch::Unknown(id);
        };
        let Some(slot) = contract.spec.opcode_slot else {
            return Dispatch::Known(contract);
        };
        let combined = args
            .get(slot)
            .and_then(|raw| u16::try_from(*raw).ok())
            .and_then(|opcode| CallId::combine(id, opcode));
        match combined {
            Some(combined) => self.lookup(combined).map_or(
                Dispatch::UnknownSecondary {
                    primary: contract,
                    id: combined,
                },
                Dispatch::Known,
            ),
            None => Dispatch::UnknownSecondary {
                primary: contract,
                id,
            },
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Contracts in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Contract> {
        self.by_id.values()
    }
}
