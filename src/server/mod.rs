//! Armory backend: HTTP API, view model assembly, data access and reference data.
//!
//! The armory serves read-only character, guild and arena team pages of a game server.
//! Rows come from one characters database per realm and the shared world database;
//! static game data comes from flat reference extracts and customization documents.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, realm resolution and OpenAPI annotations
//! - **Service Layer** (`service/`) - View model assembly from rows and reference data
//! - **Data Layer** (`data/`) - Repository queries under the configured timeout
//! - **Model Layer** (`model/`) - Server-side row types and their DTO conversions
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Grids** (`ssp/`) - Server-side paging, sorting and searching for data grids
//! - **Reference Data** (`dbc/`) - Flat extract reader and catalogs
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - JSON configuration file with defaults
//! - **State** (`state`) - Realm connections, catalogs and lookups shared by handlers
//! - **Startup** (`startup`) - Database connections and reference data loading
//! - **Router** (`router`) - Routes, static files, request ids and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** assigns a request id and routes to a controller
//! 2. **Controller** resolves the realm and parses path and grid parameters
//! 3. **Service** runs repository queries or a grid and enriches the rows
//! 4. **Controller** returns the view model as JSON; errors render a generic `ErrorDto`

pub mod config;
pub mod controller;
pub mod data;
pub mod dbc;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod ssp;
pub mod startup;
pub mod state;
pub mod util;
