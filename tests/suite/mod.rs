mod config;
mod phenol_flow;
mod titration_flow;
