use std::sync::Arc;
use crate::catalog::domain::model::SharedLibrary;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;

pub(crate) fn create_checkout_service(config: &Configuration, library: SharedLibrary,
                                      publisher: Arc<dyn EventPublisher>) -> Box<dyn CheckoutService> {
    Box::new(CheckoutServiceImpl::new(config, library, publisher))
}
