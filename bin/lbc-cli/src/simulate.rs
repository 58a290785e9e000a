//! Scripted runs against an in-memory bridge.
//!
//! Each step is one call.  A failing step is recorded like a reverted
//! transaction and the script continues.

use std::cell::{Cell, RefCell};

use alloy_primitives::{Address, Bytes, B256};
use lbc_bridge::{InitParams, LiquidityBridge};
use lbc_ledger::{TransferError, ValueTransfer};
use lbc_primitives::{CallContext, CallerKind, ProviderId, Wei};
use lbc_quote::{InMemoryConsumedQuotes, Quote};
use lbc_registry::{ProviderRecord, RegisterProvider};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::*;

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct Script {
    pub(crate) steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Step {
    sender: Address,

    #[serde(default = "default_caller")]
    caller: CallerKind,

    /// Value attached to the call.
    #[serde(default)]
    value: Wei,

    #[serde(default)]
    timestamp: u64,

    #[serde(flatten)]
    op: Op,
}

fn default_caller() -> CallerKind {
    CallerKind::Direct
}

impl Step {
    fn ctx(&self) -> CallContext {
        CallContext::new(self.sender, self.caller, self.value, self.timestamp)
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Op {
    Deposit,
    Withdraw {
        amount: Wei,
    },
    Register(RegisterProvider),
    SetProviderStatus {
        id: ProviderId,
        status: bool,
    },
    ExecuteQuote {
        quote: Quote,
        signature: Bytes,
        /// Reject the quote if an earlier step already executed it.
        #[serde(default)]
        once: bool,
    },
    TransferOwnership {
        new_owner: Address,
    },
    /// Makes subsequent value transfers fail, or succeed again.
    RejectTransfers {
        enabled: bool,
    },
}

impl Op {
    fn name(&self) -> &'static str {
        match self {
            Op::Deposit => "deposit",
            Op::Withdraw { .. } => "withdraw",
            Op::Register(_) => "register",
            Op::SetProviderStatus { .. } => "set_provider_status",
            Op::ExecuteQuote { .. } => "execute_quote",
            Op::TransferOwnership { .. } => "transfer_ownership",
            Op::RejectTransfers { .. } => "reject_transfers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TransferRecord {
    to: Address,
    amount: Wei,
}

/// Transfer backend of the simulation.  Records payouts and can be switched
/// to reject them.
#[derive(Debug, Default)]
struct SimTransfer {
    reject: Cell<bool>,
    sent: RefCell<Vec<TransferRecord>>,
}

impl ValueTransfer for SimTransfer {
    fn send_value(&self, to: Address, amount: Wei) -> Result<(), TransferError> {
        if self.reject.get() {
            return Err(TransferError::new(to, amount, "simulated rejection"));
        }
        self.sent.borrow_mut().push(TransferRecord { to, amount });
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StepReport {
    step: usize,
    op: &'static str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EventReport {
    name: &'static str,
    topics: Vec<B256>,
    data: Bytes,
}

#[derive(Debug, Serialize)]
pub(crate) struct Report {
    steps: Vec<StepReport>,
    events: Vec<EventReport>,
    transfers: Vec<TransferRecord>,
    providers: Vec<ProviderRecord>,
    total_locked: Wei,
}

fn apply(
    bridge: &LiquidityBridge,
    step: &Step,
    transfer: &SimTransfer,
    consumed: &InMemoryConsumedQuotes,
) -> lbc_bridge::BridgeResult<Option<Value>> {
    let ctx = step.ctx();
    let res = match &step.op {
        Op::Deposit => Some(json!({ "balance": bridge.deposit(&ctx)? })),
        Op::Withdraw { amount } => {
            bridge.withdraw(&ctx, *amount, transfer)?;
            Some(json!({ "balance": bridge.get_collateral(&ctx.sender())? }))
        }
        Op::Register(req) => Some(json!({ "id": bridge.register(&ctx, req)? })),
        Op::SetProviderStatus { id, status } => {
            bridge.set_provider_status(&ctx, *id, *status)?;
            None
        }
        Op::ExecuteQuote {
            quote,
            signature,
            once,
        } => {
            let receipt = if *once {
                bridge.execute_quote_once(&ctx, quote, signature, consumed, transfer)?
            } else {
                bridge.execute_quote(&ctx, quote, signature, transfer)?
            };
            Some(json!({
                "digest": receipt.digest,
                "provider": receipt.provider,
                "amount": receipt.amount,
                "provider_balance": receipt.provider_balance,
            }))
        }
        Op::TransferOwnership { new_owner } => {
            bridge.transfer_ownership(&ctx, *new_owner)?;
            None
        }
        Op::RejectTransfers { enabled } => {
            transfer.reject.set(*enabled);
            None
        }
    };
    Ok(res)
}

/// Runs `script` against a fresh bridge initialized with `params`.
pub(crate) fn run_script(params: InitParams, script: &Script) -> anyhow::Result<Report> {
    let bridge = LiquidityBridge::with_params(params)?;
    let transfer = SimTransfer::default();
    let consumed = InMemoryConsumedQuotes::new();

    let mut steps = Vec::with_capacity(script.steps.len());
    for (i, step) in script.steps.iter().enumerate() {
        let report = match apply(&bridge, step, &transfer, &consumed) {
            Ok(result) => StepReport {
                step: i,
                op: step.op.name(),
                ok: true,
                result,
                error_code: None,
                error: None,
            },
            Err(e) => {
                info!(step = i, op = step.op.name(), %e, "step reverted");
                StepReport {
                    step: i,
                    op: step.op.name(),
                    ok: false,
                    result: None,
                    error_code: Some(e.code().as_str()),
                    error: Some(e.to_string()),
                }
            }
        };
        steps.push(report);
    }

    let events = bridge
        .events()?
        .iter()
        .map(|ev| {
            let log = ev.to_log_data();
            EventReport {
                name: ev.name(),
                topics: log.topics().to_vec(),
                data: log.data.clone(),
            }
        })
        .collect();

    Ok(Report {
        steps,
        events,
        transfers: transfer.sent.take(),
        providers: bridge.get_providers()?,
        total_locked: bridge.total_locked()?,
    })
}
