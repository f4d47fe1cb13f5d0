use crate::modules::bookings::adapters::outbound::properties::PropertyRepository;
use crate::modules::bookings::core::pricing::adjusted_price;
use crate::modules::bookings::use_cases::application_error::ApplicationError;
use crate::modules::bookings::use_cases::get_property_price::query::GetPropertyPriceArgs;
use crate::shared::core::primitives::Query;
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct GetPropertyPriceHandler<TProperties>
where
    TProperties: PropertyRepository + 'static,
{
    properties: Arc<TProperties>,
}

impl<TProperties> GetPropertyPriceHandler<TProperties>
where
    TProperties: PropertyRepository + 'static,
{
    pub fn new(properties: Arc<TProperties>) -> Self {
        Self { properties }
    }

    /// Nightly price with the demand surcharge applied, or `None` when the
    /// property does not exist.
    #[tracing::instrument(
        name = "get_property_price",
        skip(self),
        fields(property_id = %query.property_id)
    )]
    pub async fn handle(
        &self,
        query: GetPropertyPriceArgs,
    ) -> Result<Option<Decimal>, ApplicationError> {
        let property = self.properties.find(query.property_id).await?;
        let signals = query.signals();
        let price = property.map(|info| adjusted_price(info.price, signals));
        tracing::debug!(?price, "price quoted");
        Ok(price)
    }
}

#[async_trait::async_trait]
impl<TProperties> Query<GetPropertyPriceArgs> for GetPropertyPriceHandler<TProperties>
where
    TProperties: PropertyRepository + 'static,
{
    type Output = Option<Decimal>;
    type Error = ApplicationError;

    async fn execute(
        &self,
        args: GetPropertyPriceArgs,
    ) -> Result<Option<Decimal>, ApplicationError> {
        self.handle(args).await
    }
}
