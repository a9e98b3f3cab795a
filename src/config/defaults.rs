//! Built-in defaults used when no config files are present.

use super::{HostTable, ProbeTargets, Service, Settings};

impl Default for Settings {
    fn default() -> Self {
        Settings {
            timeout_ms: 3000,
            max_retries: 1,
            hosts: HostTable::default(),
            probes: ProbeTargets::default(),
        }
    }
}

impl Default for HostTable {
    fn default() -> Self {
        HostTable {
            home: "localhost".to_string(),
            zima: "192.168.1.174".to_string(),
        }
    }
}

impl Default for ProbeTargets {
    fn default() -> Self {
        ProbeTargets {
            // The Zima probe fetches a static asset served by the appliance,
            // which answers even when individual services are down.
            home: "http://localhost:80".to_string(),
            zima: "http://192.168.1.174:80/images/zimaos-logo-2.svg".to_string(),
            remote: "https://home.example.net".to_string(),
        }
    }
}

/// Fallback service list used when the services file cannot be loaded
pub fn default_services() -> Vec<Service> {
    vec![
        Service {
            icon: "🏠".to_string(),
            name: "Server Home".to_string(),
            description: "Docker and Server Manager".to_string(),
            port: 80,
            public_url: "https://home.example.net".to_string(),
        },
        Service {
            icon: "🎬".to_string(),
            name: "Stremio".to_string(),
            description: "Streaming Service".to_string(),
            port: 8100,
            public_url: "https://stream.example.net".to_string(),
        },
        Service {
            icon: "☁️".to_string(),
            name: "Nextcloud".to_string(),
            description: "File sync and sharing platform".to_string(),
            port: 10081,
            public_url: "https://cloud.example.net".to_string(),
        },
        Service {
            icon: "🐋".to_string(),
            name: "Portainer".to_string(),
            description: "Docker container management".to_string(),
            port: 9000,
            public_url: "https://portainer.example.net".to_string(),
        },
    ]
}
