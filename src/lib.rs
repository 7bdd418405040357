pub mod application;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, GetHoroscopeUseCase, HoroscopeCache, RebelSummaryGenerator};

pub use connector::{
    build_router, Container, ContainerConfig, HoroscopeController, HoroscopeResponse,
    InMemoryHoroscopeCache, MockChatClient, OpenRouterClient, OpenRouterConfig,
};

pub use domain::{DomainError, HoroscopeParser, HoroscopeRecord, HoroscopeRequest};
