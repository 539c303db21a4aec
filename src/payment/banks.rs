//! Static table of Vietnamese banks supported by the VietQR image service

/// A bank identifier paired with its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bank {
    /// Lowercase identifier used in quick-link paths
    pub id: &'static str,
    /// Human-readable name for selection lists
    pub name: &'static str,
}

/// Banks recognised by the quick-link service, in display order
pub const BANKS: &[Bank] = &[
    Bank { id: "vietinbank", name: "VietinBank" },
    Bank { id: "vietcombank", name: "Vietcombank" },
    Bank { id: "bidv", name: "BIDV" },
    Bank { id: "agribank", name: "Agribank" },
    Bank { id: "tpbank", name: "TPBank" },
    Bank { id: "vpbank", name: "VPBank" },
    Bank { id: "mbbank", name: "MB Bank" },
    Bank { id: "techcombank", name: "Techcombank" },
    Bank { id: "acb", name: "ACB" },
    Bank { id: "ocb", name: "OCB" },
    Bank { id: "hdbank", name: "HDBank" },
    Bank { id: "sacombank", name: "Sacombank" },
    Bank { id: "scb", name: "SCB" },
    Bank { id: "vib", name: "VIB" },
    Bank { id: "seabank", name: "SeABank" },
    Bank { id: "msb", name: "MSB" },
    Bank { id: "shb", name: "SHB" },
    Bank { id: "eximbank", name: "Eximbank" },
    Bank { id: "baovietbank", name: "BAOVIET Bank" },
    Bank { id: "vietcapitalbank", name: "Viet Capital Bank" },
    Bank { id: "pvcombank", name: "PVcomBank" },
    Bank { id: "kienlongbank", name: "Kienlongbank" },
];

/// Iterate over all known banks
pub fn banks() -> impl Iterator<Item = &'static Bank> {
    BANKS.iter()
}

/// Look up a bank by identifier, case-insensitively
pub fn bank_by_id(id: &str) -> Option<&'static Bank> {
    let id = id.to_ascii_lowercase();
    BANKS.iter().find(|bank| bank.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_all_entries() {
        assert_eq!(BANKS.len(), 22);
    }

    #[test]
    fn test_lookup_known_bank() {
        let bank = bank_by_id("vietcombank").expect("vietcombank");
        assert_eq!(bank.name, "Vietcombank");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(bank_by_id("VietComBank").is_some());
    }

    #[test]
    fn test_lookup_unknown_bank() {
        assert!(bank_by_id("not-a-bank").is_none());
    }

    #[test]
    fn test_ids_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for bank in banks() {
            assert_eq!(bank.id, bank.id.to_ascii_lowercase());
            assert!(seen.insert(bank.id), "duplicate id {}", bank.id);
        }
    }
}
