//! Netlist builder: name resolution and hierarchical component expansion.
//!
//! Builds a [`Net`] from a [`Program`]: allocates one slot per declared
//! input, output, and part pin, resolves every wire endpoint to a slot
//! key, and records fan-out edges. Parts whose kind names a library
//! component are expanded recursively: the component's sub-parts are
//! instantiated under an instance-qualified prefix (`outer/inner`) and its
//! primary I/O names become the outer part's pin slots. Recursion depth is
//! bounded by the library size: the library admits no cyclic references.

use gatelab_common::Bit;
use gatelab_hdl::{Endpoint, Program};
use gatelab_library::{Component, ComponentLibrary};

use crate::error::BuildError;
use crate::gate::GateKind;
use crate::net::Net;
use crate::slot::SlotKey;

/// Builds a net from a program of primitive gates only.
///
/// Any part kind that is not a built-in gate fails with
/// [`BuildError::UnknownGateKind`]; use [`build_with_library`] to allow
/// custom components.
pub fn build(program: &Program) -> Result<Net, BuildError> {
    build_impl(program, None)
}

/// Builds a net from a program, expanding custom components from the
/// given library.
pub fn build_with_library(
    program: &Program,
    library: &ComponentLibrary,
) -> Result<Net, BuildError> {
    build_impl(program, Some(library))
}

fn build_impl(program: &Program, library: Option<&ComponentLibrary>) -> Result<Net, BuildError> {
    let mut builder = Builder {
        library,
        net: Net::default(),
    };

    for name in &program.inputs {
        builder
            .net
            .values
            .insert(SlotKey::input(name.as_str()), Bit::Zero);
    }
    for name in &program.outputs {
        builder
            .net
            .values
            .insert(SlotKey::output(name.as_str()), Bit::Zero);
    }
    builder.net.outputs = program.outputs.clone();

    for part in &program.parts {
        builder.instantiate(&part.name, &part.kind)?;
    }

    for wire in &program.wires {
        let src = builder.resolve_src(&wire.src)?;
        let dst = builder.resolve_dst(&wire.dst)?;
        builder.net.fanout.entry(src).or_default().push(dst);
    }

    Ok(builder.net)
}

struct Builder<'a> {
    library: Option<&'a ComponentLibrary>,
    net: Net,
}

impl Builder<'_> {
    /// Attaches gate behavior for one part: a primitive gets its gate
    /// definition and pin slots; a component kind is expanded in place.
    fn instantiate(&mut self, name: &str, kind: &str) -> Result<(), BuildError> {
        if let Some(gate) = GateKind::lookup(kind) {
            self.net.gates.insert(name.to_string(), gate);
            for pin in gate.input_pins().iter().chain(gate.output_pins()) {
                self.net.values.insert(SlotKey::pin(name, *pin), Bit::Zero);
            }
            return Ok(());
        }

        if let Some(component) = self.library.and_then(|lib| lib.get(kind)) {
            // Clone breaks the borrow on the library so expansion can
            // recurse through it for nested component kinds.
            let component = component.clone();
            return self.expand(name, &component);
        }

        Err(BuildError::UnknownGateKind {
            kind: kind.to_string(),
        })
    }

    /// Expands a component instance under `prefix`.
    ///
    /// The component's primary input and output names become pin slots of
    /// the outer part (`part:<prefix>.<io>`); its sub-parts are
    /// instantiated as `<prefix>/<name>`; its internal wires are resolved
    /// in that scope and appended to the net's fan-out table.
    fn expand(&mut self, prefix: &str, component: &Component) -> Result<(), BuildError> {
        let program = &component.program;

        for io in program.inputs.iter().chain(program.outputs.iter()) {
            self.net
                .values
                .insert(SlotKey::pin(prefix, io.as_str()), Bit::Zero);
        }

        for part in &program.parts {
            let qualified = format!("{prefix}/{}", part.name);
            self.instantiate(&qualified, &part.kind)?;
        }

        for wire in &program.wires {
            let src = self.resolve_scoped(&wire.src, prefix)?;
            let dst = self.resolve_scoped(&wire.dst, prefix)?;
            self.net.fanout.entry(src).or_default().push(dst);
        }

        Ok(())
    }

    /// Resolves a top-level source endpoint: a bare name must be a
    /// declared input; `part.pin` must be an allocated pin slot.
    fn resolve_src(&self, endpoint: &Endpoint) -> Result<SlotKey, BuildError> {
        let key = match endpoint {
            Endpoint::Named(name) => SlotKey::input(name.clone()),
            Endpoint::Pin { part, pin } => SlotKey::pin(part.clone(), pin.clone()),
        };
        self.require(key, || endpoint.to_string())
    }

    /// Resolves a top-level destination endpoint: a bare name must be a
    /// declared output.
    fn resolve_dst(&self, endpoint: &Endpoint) -> Result<SlotKey, BuildError> {
        let key = match endpoint {
            Endpoint::Named(name) => SlotKey::output(name.clone()),
            Endpoint::Pin { part, pin } => SlotKey::pin(part.clone(), pin.clone()),
        };
        self.require(key, || endpoint.to_string())
    }

    /// Resolves an endpoint inside an expanded component. Bare names are
    /// the component's own I/O, which live on the outer part's pin slots;
    /// `part.pin` references are qualified with the instance prefix.
    fn resolve_scoped(&self, endpoint: &Endpoint, prefix: &str) -> Result<SlotKey, BuildError> {
        let key = match endpoint {
            Endpoint::Named(name) => SlotKey::pin(prefix, name.clone()),
            Endpoint::Pin { part, pin } => SlotKey::pin(format!("{prefix}/{part}"), pin.clone()),
        };
        self.require(key, || format!("{prefix}/{endpoint}"))
    }

    /// Checks that a slot was allocated, naming the endpoint otherwise.
    fn require(
        &self,
        key: SlotKey,
        endpoint: impl FnOnce() -> String,
    ) -> Result<SlotKey, BuildError> {
        if self.net.values.contains_key(&key) {
            Ok(key)
        } else {
            Err(BuildError::UnknownPin {
                endpoint: endpoint(),
            })
        }
    }
}
