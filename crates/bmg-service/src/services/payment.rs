//! Payment service
//!
//! Handles manual payment ledger entries: record, list, delete. Entries are
//! bookkeeping only - there is no reconciliation against any processor.

use bmg_core::entities::ManualPayment;
use bmg_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{PaymentResponse, RecordPaymentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::invitation::parse_id;
use super::permission::PermissionService;

/// Payment service
pub struct PaymentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PaymentService<'a> {
    /// Create a new PaymentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a new payment entry
    #[instrument(skip(self, request))]
    pub async fn record_payment(
        &self,
        user_id: Snowflake,
        request: RecordPaymentRequest,
    ) -> ServiceResult<PaymentResponse> {
        let property_id = match request.property_id.as_deref() {
            Some(raw) => {
                let id = parse_id(raw, "property_id")?;
                // The recorder must own the property or rent a unit in it
                let permission_service = PermissionService::new(self.ctx);
                if !permission_service.can_reference_property(id, user_id).await? {
                    return Err(DomainError::NotPropertyOwner.into());
                }
                Some(id)
            }
            None => None,
        };

        let payment = ManualPayment::new(
            self.ctx.generate_id(),
            user_id,
            property_id,
            request.amount,
            request.payment_type,
            request.payment_method,
            request.payment_date,
            request.description,
        );

        self.ctx.payment_repo().create(&payment).await?;

        info!(payment_id = %payment.id, user_id = %user_id, "Payment recorded");

        Ok(PaymentResponse::from(payment))
    }

    /// List payments recorded by the caller, optionally filtered by property
    #[instrument(skip(self))]
    pub async fn list_payments(
        &self,
        user_id: Snowflake,
        property_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<PaymentResponse>> {
        let payments = self
            .ctx
            .payment_repo()
            .find_by_user(user_id, property_id)
            .await?;

        Ok(payments.iter().map(PaymentResponse::from).collect())
    }

    /// Delete a payment entry (recording user only)
    #[instrument(skip(self))]
    pub async fn delete_payment(&self, payment_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let payment = self
            .ctx
            .payment_repo()
            .find_by_id(payment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Payment", payment_id.to_string()))?;

        if !payment.is_recorded_by(user_id) {
            return Err(DomainError::NotRecordOwner.into());
        }

        self.ctx.payment_repo().delete(payment_id).await?;

        info!(payment_id = %payment_id, user_id = %user_id, "Payment deleted");

        Ok(())
    }
}
