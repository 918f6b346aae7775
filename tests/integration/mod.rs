//! Integration tests for the swarmctl command-translation layer

mod config_integration;
mod swarm_cli;
