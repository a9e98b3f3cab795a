/*!
Homedash - terminal homelab service dashboard.

Lists self-hosted services from a JSON config, figures out which network
context the machine can currently reach (home LAN, Zima appliance, or the
public internet), derives the right base URL for every service in that
context, and probes each one to mark it online or offline.
*/

pub mod cli;
pub mod config;
pub mod core;
