#![allow(dead_code)]
use killswitch_domain::{ClientMetadata, NetworkClient};

pub struct NetworkClientBuilder {
    client: NetworkClient,
}

impl NetworkClientBuilder {
    pub fn new(mac: &str) -> Self {
        Self {
            client: NetworkClient::new(mac),
        }
    }

    pub fn hostname(mut self, hostname: &str) -> Self {
        self.client.hostname = hostname.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.client.name = Some(name.to_string());
        self
    }

    pub fn ip(mut self, ip: &str) -> Self {
        self.client.ip = Some(ip.to_string());
        self
    }

    pub fn blocked(mut self, blocked: bool) -> Self {
        self.client.blocked = blocked;
        self
    }

    pub fn last_seen(mut self, last_seen: i64) -> Self {
        self.client.last_seen = last_seen;
        self
    }

    pub fn build(self) -> NetworkClient {
        self.client
    }
}

pub struct MetadataBuilder {
    metadata: ClientMetadata,
}

impl MetadataBuilder {
    pub fn new(mac: &str) -> Self {
        Self {
            metadata: ClientMetadata::new(mac),
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.metadata.add_tag(tag);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.metadata.hidden = hidden;
        self
    }

    pub fn blocked(mut self, blocked: bool) -> Self {
        self.metadata.blocked = blocked;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.metadata.name = Some(name.to_string());
        self
    }

    pub fn build(self) -> ClientMetadata {
        self.metadata
    }
}
