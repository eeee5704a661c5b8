//! Schedule ("jadwal") management: store port, form validation and service.

pub mod draft;
pub mod ports;
pub mod service;

pub use draft::ScheduleDraft;
pub use ports::ScheduleRepository;
pub use service::ScheduleService;
