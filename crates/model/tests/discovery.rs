//! End-to-end discovery pass: parallel handlers populate a shared registry,
//! then the rendering side queries the frozen result.

use std::thread;

use quill_model::{
	AttrAccessors, MethodFilter, ModelConfig, NamespaceKind, ObjectId, Parameter, Registry, Scope,
	SharedRegistry, Visibility,
};

fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

/// What a handler does for `attr_accessor :name` inside a class body.
fn define_accessor(reg: &mut Registry, ns: ObjectId, name: &str) -> (ObjectId, ObjectId) {
	let reader = reg.define_method(ns, name, Scope::Instance).unwrap();
	let writer = reg
		.define_method(ns, format!("{name}="), Scope::Instance)
		.unwrap();
	reg.set_explicit(reader, false).unwrap();
	reg.set_explicit(writer, false).unwrap();
	reg.set_parameters(writer, vec![Parameter::new("value", None)])
		.unwrap();
	reg.namespace_mut(ns).unwrap().add_attribute(
		Scope::Instance,
		name,
		AttrAccessors::new(Some(reader), Some(writer)),
	);
	(reader, writer)
}

#[test]
fn parallel_discovery_then_query() {
	init_tracing();

	let shared = SharedRegistry::new(Registry::new());
	let (shapes, io) = shared.write(|reg| {
		let root = reg.root();
		let shapes = reg
			.define_namespace(root, "Shapes", NamespaceKind::Module)
			.unwrap();
		let io = reg
			.define_namespace(root, "IO", NamespaceKind::Class)
			.unwrap();
		(shapes, io)
	});

	thread::scope(|s| {
		let worker = shared.clone();
		s.spawn(move || {
			worker.write(|reg| {
				let circle = reg
					.define_namespace(shapes, "Circle", NamespaceKind::Class)
					.unwrap();
				let ctor = reg
					.define_method(circle, "initialize", Scope::Instance)
					.unwrap();
				reg.set_explicit(ctor, true).unwrap();
				reg.set_parameters(ctor, vec![Parameter::new("radius", Some("1.0"))])
					.unwrap();
				define_accessor(reg, circle, "radius");

				// `def self.unit` first parsed as an instance method, then corrected.
				let unit = reg.define_method(circle, "unit", Scope::Instance).unwrap();
				reg.set_scope_str(unit, ":class").unwrap();
			});
		});

		let worker = shared.clone();
		s.spawn(move || {
			worker.write(|reg| {
				let read = reg.define_method(io, "read", Scope::Instance).unwrap();
				let gets = reg.define_method(io, "gets", Scope::Instance).unwrap();
				reg.namespace_mut(io).unwrap().add_alias(gets, "read");
				reg.set_visibility_str(read, "public").unwrap();
				let flush = reg.define_method(io, "flush_all", Scope::Instance).unwrap();
				reg.set_visibility(flush, Visibility::Private).unwrap();
			});
		});
	});

	// Readers can inspect the shared registry while handles are still out.
	let (registered, unit_name) = shared.read(|reg| {
		let unit = reg.at("Shapes::Circle.unit").map(|obj| obj.name().to_string());
		(reg.len(), unit)
	});
	assert_eq!(registered, 10);
	assert_eq!(unit_name.as_deref(), Some("unit"));

	let reg = shared.into_inner().expect("workers released their handles");

	let circle = reg.lookup("Shapes::Circle").expect("class registered");
	let ctor = reg.lookup("Shapes::Circle#initialize").expect("constructor");
	assert!(reg.is_constructor(ctor).unwrap());
	assert!(reg.is_explicit(ctor).unwrap());
	assert_eq!(reg.method(ctor).unwrap().parameter_list(), "(radius = 1.0)");

	let radius = reg.lookup("Shapes::Circle#radius").unwrap();
	let radius_w = reg.lookup("Shapes::Circle#radius=").unwrap();
	assert!(reg.is_attribute(radius).unwrap());
	assert!(reg.is_attribute(radius_w).unwrap());
	assert!(!reg.is_explicit(radius).unwrap());

	assert_eq!(reg.lookup("Shapes::Circle#unit"), None);
	let unit = reg.lookup("Shapes::Circle.unit").expect("re-keyed to class side");
	assert_eq!(reg.display_name(unit, true).unwrap(), "unit");
	assert_eq!(reg.display_name(radius, true).unwrap(), "#radius");

	let read = reg.lookup("IO#read").unwrap();
	let gets = reg.lookup("IO#gets").unwrap();
	assert!(reg.is_alias(gets).unwrap());
	assert_eq!(reg.aliases_of(read).unwrap(), vec![gets]);

	let public = reg
		.meths(io, MethodFilter::scope(Scope::Instance).with_visibility(Visibility::Public))
		.unwrap();
	assert_eq!(public, vec![read, gets]);
	assert_eq!(
		reg.meths(circle, MethodFilter::scope(Scope::Class)).unwrap(),
		vec![unit]
	);
}

#[test]
fn config_driven_separators() {
	init_tracing();

	let config = ModelConfig::from_toml_str(
		r#"
		constructor_name = "new"

		[separators]
		instance = "@"
		"#,
	)
	.unwrap();
	let mut reg = Registry::with_config(config);
	let root = reg.root();
	let point = reg
		.define_namespace(root, "Point", NamespaceKind::Class)
		.unwrap();
	let ctor = reg.define_method(point, "new", Scope::Instance).unwrap();
	let top = reg.define_method(root, "main", Scope::Instance).unwrap();

	assert_eq!(reg.canonical_path(ctor).unwrap(), "Point@new");
	assert_eq!(reg.canonical_path(top).unwrap(), "@main");
	assert_eq!(reg.display_name(ctor, true).unwrap(), "@new");
	assert!(reg.is_constructor(ctor).unwrap());
}

#[test]
fn shared_handle_is_returned_while_cloned() {
	let shared = SharedRegistry::default();
	let other = shared.clone();
	let shared = shared.into_inner().unwrap_err();
	drop(other);
	let reg = shared.into_inner().unwrap();
	assert!(reg.is_empty());
}

#[test]
fn shared_reads_see_prior_writes() {
	let mut reg = Registry::new();
	let root = reg.root();
	reg.define_namespace(root, "Kernel", NamespaceKind::Module)
		.unwrap();
	let shared = SharedRegistry::from(reg);
	let reader = shared.clone();

	shared.write(|reg| {
		let kernel = reg.lookup("Kernel").unwrap();
		reg.define_method(kernel, "puts", Scope::Class).unwrap();
	});

	let path = reader.read(|reg| {
		let puts = reg.lookup("Kernel.puts")?;
		reg.canonical_path(puts).ok()
	});
	assert_eq!(path.as_deref(), Some("Kernel.puts"));
	assert_eq!(reader.read(Registry::len), 2);
}
