//! Loading a metadata graph from its JSON form.
#![cfg(feature = "serde")]

use jniscope::{
    indexer::BindingIndexer,
    keep::KeepRules,
    metadata::{AttributeArgument, MetadataGraph, MONO_ANDROID_ASSEMBLY},
};

const GRAPH: &str = include_str!("fixtures/bindings.json");

#[test]
fn deserializes_fixture() {
    let graph: MetadataGraph = serde_json::from_str(GRAPH).unwrap();
    assert_eq!(graph.assemblies.len(), 2);

    let binding = &graph.assemblies[1];
    assert_eq!(binding.name, "Example.Bindings");
    let player = &binding.modules[0].types[0];
    assert_eq!(player.token.value(), 0x0200_0002);
    assert_eq!(player.nested_types.len(), 1);
    assert_eq!(
        player.methods[0].custom_attributes[0].fixed_args,
        vec![
            AttributeArgument::String(".ctor".to_string()),
            AttributeArgument::String("()V".to_string()),
        ]
    );
    assert_eq!(
        player.methods[1].custom_attributes[0].fixed_args[0],
        AttributeArgument::Null
    );
}

#[test]
fn renders_fixture() {
    let graph: MetadataGraph = serde_json::from_str(GRAPH).unwrap();
    let indexed =
        BindingIndexer::default().crawl(graph.binding_types(&[MONO_ANDROID_ASSEMBLY]));

    let document = KeepRules::new(&indexed).with_preamble(false).render().unwrap();
    assert_eq!(
        document,
        "-keep class com.example.Player {\n\
         \t<fields>;\n\
         \t<init>();\n\
         }\n\
         -keep class com.example.Player$Listener {\n\
         \tvoid onStateChanged(int);\n\
         }\n"
    );
}
