//! # Transaction Descriptor
//!
//! An unsigned programmable transaction: a list of inputs and the commands
//! that consume them. Building never fails; limits are checked when the
//! descriptor is serialized for a wallet with [`Transaction::to_json`].
//!
//! ## Wallet JSON
//!
//! ```text
//! {
//!   "version": 2,
//!   "sender": null,
//!   "expiration": null,
//!   "gasData": { "budget": null, "price": null, "owner": null, "payment": null },
//!   "inputs": [ { "Pure": { "bytes": "A0NhdA==" } } ],
//!   "commands": [
//!     { "MoveCall": { "package": "0x…", "module": "nft_example",
//!                     "function": "mint_nft_to_sender",
//!                     "typeArguments": [], "arguments": [ { "Input": 0 } ] } }
//!   ]
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Result, SuiError};
use crate::pure::PureArg;
use crate::types::{MoveCallTarget, ObjectId};

/// Maximum number of inputs of a programmable transaction.
pub const MAX_INPUTS: usize = 2048;

/// Maximum number of commands of a programmable transaction.
pub const MAX_COMMANDS: usize = 1024;

/// Transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Pure(PureArg),
}

/// Reference to a value available to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    GasCoin,
    Input(u16),
    Result(u16),
    NestedResult(u16, u16),
}

impl Serialize for Argument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Argument::GasCoin => map.serialize_entry("GasCoin", &true)?,
            Argument::Input(i) => map.serialize_entry("Input", i)?,
            Argument::Result(i) => map.serialize_entry("Result", i)?,
            Argument::NestedResult(i, j) => map.serialize_entry("NestedResult", &[i, j])?,
        }
        map.end()
    }
}

/// A call to a Move function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCall {
    pub target: MoveCallTarget,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveCall(MoveCall),
}

/// Unsigned, unsubmitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transaction {
    sender: Option<ObjectId>,
    gas_budget: Option<u64>,
    inputs: Vec<CallArg>,
    commands: Vec<Command>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sender(&mut self, sender: ObjectId) {
        self.sender = Some(sender);
    }

    pub fn set_gas_budget(&mut self, budget: u64) {
        self.gas_budget = Some(budget);
    }

    pub fn sender(&self) -> Option<ObjectId> {
        self.sender
    }

    pub fn gas_budget(&self) -> Option<u64> {
        self.gas_budget
    }

    pub fn inputs(&self) -> &[CallArg] {
        &self.inputs
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Add a pure input and return a reference to it.
    pub fn pure(&mut self, value: PureArg) -> Argument {
        // Saturates past u16::MAX; such a transaction is rejected by to_json.
        let index = u16::try_from(self.inputs.len()).unwrap_or(u16::MAX);
        self.inputs.push(CallArg::Pure(value));
        Argument::Input(index)
    }

    /// Append a Move call and return a reference to its result.
    pub fn move_call(
        &mut self,
        target: MoveCallTarget,
        type_arguments: Vec<String>,
        arguments: Vec<Argument>,
    ) -> Argument {
        let index = u16::try_from(self.commands.len()).unwrap_or(u16::MAX);
        debug!(call = %target, args = arguments.len(), "adding move call");
        self.commands.push(Command::MoveCall(MoveCall {
            target,
            type_arguments,
            arguments,
        }));
        Argument::Result(index)
    }

    /// Iterate over the Move calls of the transaction, in order.
    pub fn move_calls(&self) -> impl Iterator<Item = &MoveCall> {
        self.commands.iter().map(|command| match command {
            Command::MoveCall(call) => call,
        })
    }

    /// Resolve an `Input` argument to its pure value.
    pub fn pure_input(&self, argument: &Argument) -> Option<&PureArg> {
        match argument {
            Argument::Input(i) => match self.inputs.get(usize::from(*i))? {
                CallArg::Pure(value) => Some(value),
            },
            _ => None,
        }
    }

    /// Serialize to the JSON document wallets accept for signing.
    pub fn to_json(&self) -> Result<String> {
        let wire = self.to_wire()?;
        Ok(serde_json::to_string(&wire)?)
    }

    fn to_wire(&self) -> Result<wire::TransactionData<'_>> {
        if self.inputs.len() > MAX_INPUTS {
            return Err(SuiError::Limit(format!(
                "{} inputs, at most {} allowed",
                self.inputs.len(),
                MAX_INPUTS
            )));
        }
        if self.commands.len() > MAX_COMMANDS {
            return Err(SuiError::Limit(format!(
                "{} commands, at most {} allowed",
                self.commands.len(),
                MAX_COMMANDS
            )));
        }

        let inputs = self
            .inputs
            .iter()
            .map(|input| -> Result<wire::CallArg> {
                match input {
                    CallArg::Pure(value) => Ok(wire::CallArg::Pure {
                        bytes: lib_utils::b64_encode(value.to_bcs_bytes()?),
                    }),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let commands = self
            .commands
            .iter()
            .map(|command| match command {
                Command::MoveCall(call) => wire::Command::MoveCall(wire::MoveCall {
                    package: call.target.package(),
                    module: call.target.module(),
                    function: call.target.function(),
                    type_arguments: &call.type_arguments,
                    arguments: &call.arguments,
                }),
            })
            .collect();

        Ok(wire::TransactionData {
            version: 2,
            sender: self.sender,
            expiration: None,
            gas_data: wire::GasData {
                budget: self.gas_budget.map(|b| b.to_string()),
                price: None,
                owner: None,
                payment: None,
            },
            inputs,
            commands,
        })
    }
}

mod wire {
    use serde::Serialize;

    use crate::transaction::Argument;
    use crate::types::ObjectId;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionData<'a> {
        pub version: u8,
        pub sender: Option<ObjectId>,
        pub expiration: Option<()>,
        pub gas_data: GasData,
        pub inputs: Vec<CallArg>,
        pub commands: Vec<Command<'a>>,
    }

    #[derive(Serialize)]
    pub struct GasData {
        pub budget: Option<String>,
        pub price: Option<String>,
        pub owner: Option<ObjectId>,
        pub payment: Option<Vec<()>>,
    }

    #[derive(Serialize)]
    pub enum CallArg {
        Pure { bytes: String },
    }

    #[derive(Serialize)]
    pub enum Command<'a> {
        MoveCall(MoveCall<'a>),
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MoveCall<'a> {
        pub package: ObjectId,
        pub module: &'a str,
        pub function: &'a str,
        pub type_arguments: &'a [String],
        pub arguments: &'a [Argument],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn coin_value_target() -> MoveCallTarget {
        "0x2::coin::value".parse().unwrap()
    }

    #[test]
    fn test_pure_inputs_are_indexed_in_order() {
        let mut tx = Transaction::new();
        assert_eq!(tx.pure(PureArg::U64(7)), Argument::Input(0));
        assert_eq!(tx.pure(PureArg::Bool(false)), Argument::Input(1));
        assert_eq!(tx.inputs().len(), 2);
        assert_eq!(tx.pure_input(&Argument::Input(1)), Some(&PureArg::Bool(false)));
        assert_eq!(tx.pure_input(&Argument::Input(5)), None);
        assert_eq!(tx.pure_input(&Argument::GasCoin), None);
    }

    #[test]
    fn test_move_call_returns_result_reference() {
        let mut tx = Transaction::new();
        let first = tx.move_call(coin_value_target(), vec![], vec![Argument::GasCoin]);
        let second = tx.move_call(coin_value_target(), vec![], vec![first]);
        assert_eq!(first, Argument::Result(0));
        assert_eq!(second, Argument::Result(1));
        assert_eq!(tx.move_calls().count(), 2);
    }

    #[test]
    fn test_argument_json() {
        let args = vec![
            Argument::GasCoin,
            Argument::Input(2),
            Argument::Result(1),
            Argument::NestedResult(1, 0),
        ];
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!([{"GasCoin": true}, {"Input": 2}, {"Result": 1}, {"NestedResult": [1, 0]}])
        );
    }

    #[test]
    fn test_to_json_document() {
        let mut tx = Transaction::new();
        let name = tx.pure(PureArg::string("Cat"));
        tx.move_call(
            coin_value_target(),
            vec!["0x2::sui::SUI".to_string()],
            vec![name],
        );
        tx.set_gas_budget(10_000_000);

        let doc: Value = serde_json::from_str(&tx.to_json().unwrap()).unwrap();
        assert_eq!(
            doc,
            json!({
                "version": 2,
                "sender": null,
                "expiration": null,
                "gasData": {"budget": "10000000", "price": null, "owner": null, "payment": null},
                "inputs": [{"Pure": {"bytes": "A0NhdA=="}}],
                "commands": [{
                    "MoveCall": {
                        "package": "0x0000000000000000000000000000000000000000000000000000000000000002",
                        "module": "coin",
                        "function": "value",
                        "typeArguments": ["0x2::sui::SUI"],
                        "arguments": [{"Input": 0}]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_sender_in_json() {
        let mut tx = Transaction::new();
        tx.set_sender("0x5".parse().unwrap());
        let doc: Value = serde_json::from_str(&tx.to_json().unwrap()).unwrap();
        assert_eq!(
            doc["sender"],
            json!("0x0000000000000000000000000000000000000000000000000000000000000005")
        );
    }

    #[test]
    fn test_to_json_rejects_too_many_inputs() {
        let mut tx = Transaction::new();
        for _ in 0..=MAX_INPUTS {
            tx.pure(PureArg::Bool(true));
        }
        assert!(matches!(tx.to_json(), Err(SuiError::Limit(_))));
    }
}
