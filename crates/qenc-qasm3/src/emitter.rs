//! QASM3 emitter for serializing circuits.

use qenc_ir::{Circuit, ControlSet, GateOp, QubitId};

use crate::error::Qasm3Result;

/// Emit a circuit as QASM3 source code.
///
/// The circuit is re-validated first, so a circuit assembled through
/// deserialization with an op outside its register is rejected rather than
/// emitted.
pub fn emit(circuit: &Circuit) -> Qasm3Result<String> {
    let checked = Circuit::from_ops(circuit.name(), circuit.num_qubits(), circuit.ops().to_vec())?;
    let mut emitter = Emitter::new();
    Ok(emitter.emit_circuit(&checked))
}

/// QASM3 emitter.
struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> String {
        self.writeln("OPENQASM 3.0;");
        self.writeln("include \"stdgates.inc\";");
        self.writeln("");

        let num_qubits = circuit.num_qubits();
        if num_qubits > 0 {
            self.writeln(&format!("qubit[{num_qubits}] q;"));
            self.writeln("");
        }

        for op in circuit.ops() {
            self.emit_op(op);
        }

        std::mem::take(&mut self.output)
    }

    fn emit_op(&mut self, op: &GateOp) {
        let modifiers = emit_modifiers(op.controls());
        let gate = match op {
            GateOp::Rotation { angle, .. } => format!("ry({angle})"),
            GateOp::Flip { .. } => "x".to_string(),
        };
        let operands = emit_operands(op.controls(), op.target());
        self.writeln(&format!("{modifiers}{gate} {operands};"));
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

/// `negctrl(k) @ ctrl(m) @ ` prefix; empty for uncontrolled ops.
fn emit_modifiers(controls: &ControlSet) -> String {
    let negated = controls.num_negated();
    let positive = controls.len() - negated;
    let mut out = String::new();
    for (keyword, count) in [("negctrl", negated), ("ctrl", positive)] {
        match count {
            0 => {}
            1 => out.push_str(&format!("{keyword} @ ")),
            k => out.push_str(&format!("{keyword}({k}) @ ")),
        }
    }
    out
}

/// Negated controls, then positive controls, then the target.
fn emit_operands(controls: &ControlSet, target: QubitId) -> String {
    let negated = controls.iter().filter(|l| !l.state).map(|l| l.qubit);
    let positive = controls.iter().filter(|l| l.state).map(|l| l.qubit);
    negated
        .chain(positive)
        .chain(std::iter::once(target))
        .map(|q| format!("q[{}]", q.0))
        .collect::<Vec<_>>()
        .join(", ")
}
