//! Typed operations over a [`Transport`].

use crate::codec;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport::{HttpTransport, Transport, WireRequest};
use route53domains_model::*;
use std::time::Duration;
use tracing::{debug, warn};

/// Prefix of every `X-Amz-Target` value.
pub const TARGET_PREFIX: &str = "Route53Domains_v20140515";

/// Client for the Route 53 Domains API.
pub struct Route53DomainsClient<T: Transport> {
    transport: T,
}

impl Route53DomainsClient<HttpTransport> {
    /// Creates a client that talks HTTP to `config.endpoint`.
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> Route53DomainsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encodes `request`, sends it as `operation` and decodes the result.
    pub async fn invoke<Req, Res>(&self, operation: &str, request: &Req) -> ClientResult<Res>
    where
        Req: TypedRecord + Sync,
        Res: TypedRecord,
    {
        let body = codec::encode(request)?;
        let target = format!("{TARGET_PREFIX}.{operation}");
        debug!(operation, bytes = body.len(), "dispatching request");

        let response = self.transport.send(WireRequest { target, body }).await?;
        if !response.is_success() {
            let err = codec::decode_error(response.status, &response.body);
            warn!(operation, status = response.status, "service error: {err}");
            return Err(err);
        }

        codec::decode(&response.body)
    }

    /// Polls `GetOperationDetail` until the operation succeeds or fails.
    ///
    /// Returns the last detail seen once its status is terminal. `ERROR` is
    /// not terminal (the service may still resolve it) but it needs a human,
    /// so polling also stops there and the detail, including its `Message`,
    /// is returned as is. Gives up with `OperationPending` after
    /// `max_attempts` polls in `SUBMITTED` or `IN_PROGRESS`.
    pub async fn wait_for_operation(
        &self,
        operation_id: &str,
        poll_interval: Duration,
        max_attempts: u32,
    ) -> ClientResult<GetOperationDetailResult> {
        let request = GetOperationDetailRequest::default().with_operation_id(operation_id)?;

        for attempt in 1..=max_attempts {
            let detail = self.get_operation_detail(&request).await?;
            match detail.status_value()? {
                Some(status) if status.is_terminal() => return Ok(detail),
                Some(OperationStatus::Error) => {
                    warn!(operation_id, message = detail.message().unwrap_or(""), "operation needs attention");
                    return Ok(detail);
                }
                _ => {}
            }
            debug!(operation_id, attempt, status = detail.status().unwrap_or("<unset>"), "operation pending");
            if attempt < max_attempts {
                tokio::time::sleep(poll_interval).await;
            }
        }

        Err(ClientError::OperationPending {
            operation_id: operation_id.to_string(),
            attempts: max_attempts,
        })
    }
}

macro_rules! operations {
    ($( $(#[$meta:meta])* $method:ident => $operation:literal ($request:ty) -> $result:ty; )*) => {
        impl<T: Transport> Route53DomainsClient<T> {
            $(
                $(#[$meta])*
                pub async fn $method(&self, request: &$request) -> ClientResult<$result> {
                    self.invoke($operation, request).await
                }
            )*
        }
    };
}

operations! {
    /// Accepts a domain offered by another account with `transfer_domain_to_another_aws_account`.
    accept_domain_transfer_from_another_aws_account => "AcceptDomainTransferFromAnotherAwsAccount"
        (AcceptDomainTransferFromAnotherAwsAccountRequest) -> AcceptDomainTransferFromAnotherAwsAccountResult;
    /// Withdraws an offer that the receiving account has not accepted yet.
    cancel_domain_transfer_to_another_aws_account => "CancelDomainTransferToAnotherAwsAccount"
        (CancelDomainTransferToAnotherAwsAccountRequest) -> CancelDomainTransferToAnotherAwsAccountResult;
    /// Checks whether a domain name can be registered.
    check_domain_availability => "CheckDomainAvailability"
        (CheckDomainAvailabilityRequest) -> CheckDomainAvailabilityResult;
    /// Checks whether a domain name can be transferred to Route 53.
    check_domain_transferability => "CheckDomainTransferability"
        (CheckDomainTransferabilityRequest) -> CheckDomainTransferabilityResult;
    delete_tags_for_domain => "DeleteTagsForDomain"
        (DeleteTagsForDomainRequest) -> DeleteTagsForDomainResult;
    disable_domain_auto_renew => "DisableDomainAutoRenew"
        (DisableDomainAutoRenewRequest) -> DisableDomainAutoRenewResult;
    disable_domain_transfer_lock => "DisableDomainTransferLock"
        (DisableDomainTransferLockRequest) -> DisableDomainTransferLockResult;
    enable_domain_auto_renew => "EnableDomainAutoRenew"
        (EnableDomainAutoRenewRequest) -> EnableDomainAutoRenewResult;
    enable_domain_transfer_lock => "EnableDomainTransferLock"
        (EnableDomainTransferLockRequest) -> EnableDomainTransferLockResult;
    /// Whether the registrant has confirmed their email address.
    get_contact_reachability_status => "GetContactReachabilityStatus"
        (GetContactReachabilityStatusRequest) -> GetContactReachabilityStatusResult;
    /// Returns detailed information about a registered domain.
    get_domain_detail => "GetDomainDetail"
        (GetDomainDetailRequest) -> GetDomainDetailResult;
    get_domain_suggestions => "GetDomainSuggestions"
        (GetDomainSuggestionsRequest) -> GetDomainSuggestionsResult;
    /// Returns the current status of an asynchronous operation.
    get_operation_detail => "GetOperationDetail"
        (GetOperationDetailRequest) -> GetOperationDetailResult;
    /// Returns one page of the account's domains.
    list_domains => "ListDomains"
        (ListDomainsRequest) -> ListDomainsResult;
    /// Returns one page of operations.
    list_operations => "ListOperations"
        (ListOperationsRequest) -> ListOperationsResult;
    list_tags_for_domain => "ListTagsForDomain"
        (ListTagsForDomainRequest) -> ListTagsForDomainResult;
    /// Starts a registration; returns the operation ID to track it with.
    register_domain => "RegisterDomain"
        (RegisterDomainRequest) -> RegisterDomainResult;
    reject_domain_transfer_from_another_aws_account => "RejectDomainTransferFromAnotherAwsAccount"
        (RejectDomainTransferFromAnotherAwsAccountRequest) -> RejectDomainTransferFromAnotherAwsAccountResult;
    renew_domain => "RenewDomain"
        (RenewDomainRequest) -> RenewDomainResult;
    resend_contact_reachability_email => "ResendContactReachabilityEmail"
        (ResendContactReachabilityEmailRequest) -> ResendContactReachabilityEmailResult;
    retrieve_domain_auth_code => "RetrieveDomainAuthCode"
        (RetrieveDomainAuthCodeRequest) -> RetrieveDomainAuthCodeResult;
    transfer_domain => "TransferDomain"
        (TransferDomainRequest) -> TransferDomainResult;
    /// Offers a domain to another account; the result carries the password it must accept with.
    transfer_domain_to_another_aws_account => "TransferDomainToAnotherAwsAccount"
        (TransferDomainToAnotherAwsAccountRequest) -> TransferDomainToAnotherAwsAccountResult;
    update_domain_contact => "UpdateDomainContact"
        (UpdateDomainContactRequest) -> UpdateDomainContactResult;
    update_domain_contact_privacy => "UpdateDomainContactPrivacy"
        (UpdateDomainContactPrivacyRequest) -> UpdateDomainContactPrivacyResult;
    update_domain_nameservers => "UpdateDomainNameservers"
        (UpdateDomainNameserversRequest) -> UpdateDomainNameserversResult;
    update_tags_for_domain => "UpdateTagsForDomain"
        (UpdateTagsForDomainRequest) -> UpdateTagsForDomainResult;
    /// Returns one page of billing records for a period.
    view_billing => "ViewBilling"
        (ViewBillingRequest) -> ViewBillingResult;
}
