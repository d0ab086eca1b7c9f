mod capability;
mod discovery;
mod display_category;
mod namespace;
mod property;
mod request;
mod response;

pub use capability::{Capability, Interface, PropertySource};
pub use discovery::DiscoveryEndpoint;
pub use display_category::DisplayCategory;
pub use namespace::Namespace;
pub use property::{PropertyName, PropertyState, Temperature, TemperatureScale};
pub use request::{Directive, DirectiveEndpoint, Header, Request};
pub use response::{
    build_error, build_response, response, response_with_properties, Context, Envelope,
    ErrorType, Event, ResponseHeader, PAYLOAD_VERSION,
};
