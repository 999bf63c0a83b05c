use killswitch_domain::{canonical_mac, DomainError};

pub(crate) fn require_mac(mac: &str) -> Result<String, DomainError> {
    let mac = canonical_mac(mac);
    if mac.is_empty() {
        return Err(DomainError::Validation("MAC address is required".to_string()));
    }
    Ok(mac)
}

pub(crate) fn require_tag(tag: &str) -> Result<String, DomainError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(DomainError::Validation("Tag cannot be empty".to_string()));
    }
    Ok(tag.to_string())
}
