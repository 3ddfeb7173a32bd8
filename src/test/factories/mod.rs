//! Binding graph fixtures modelled on Xamarin.Android binding assemblies

use crate::metadata::{
    AssemblyDef, CustomAttribute, MemberDef, MemberKind, MetadataGraph, ModuleDef, Token,
    TypeDef, MONO_ANDROID_ASSEMBLY,
};

use super::helpers::{bound_type, member, method};

/// `android/view/View` with a single `onClick` registration
pub fn view_type() -> TypeDef {
    bound_type(1, "android/view/View").with_member(
        MemberKind::Method,
        method(1, "onClick", "(Landroid/view/View;)V"),
    )
}

/// A binding type with a constructor, a field, a method and a nested listener interface
pub fn widget_type() -> TypeDef {
    bound_type(2, "com/example/Widget")
        .with_member(MemberKind::Method, method(2, ".ctor", "(Landroid/content/Context;)V"))
        .with_member(MemberKind::Field, member(MemberKind::Field, 1, "mLabel", None))
        .with_member(MemberKind::Method, method(3, "setLabel", "(Ljava/lang/String;)V"))
        .with_member(
            MemberKind::Method,
            // managed overload bound to the same Java method
            MemberDef::new(Token::from_parts(Token::METHOD_DEF, 4), "SetLabelFormatted")
                .with_attribute(CustomAttribute::register("setLabel", Some("(Ljava/lang/String;)V"))),
        )
        .with_nested(
            bound_type(3, "com/example/Widget$Listener")
                .with_member(MemberKind::Method, method(5, "onChanged", "(I[J)Z")),
        )
}

/// Graph with a `Mono.Android` assembly and one binding assembly
pub fn binding_graph() -> MetadataGraph {
    MetadataGraph {
        assemblies: vec![
            AssemblyDef {
                name: MONO_ANDROID_ASSEMBLY.to_string(),
                modules: vec![ModuleDef {
                    name: "Mono.Android.dll".to_string(),
                    types: vec![view_type()],
                }],
            },
            AssemblyDef {
                name: "Example.Bindings".to_string(),
                modules: vec![ModuleDef {
                    name: "Example.Bindings.dll".to_string(),
                    types: vec![
                        widget_type(),
                        TypeDef::new(Token::from_parts(Token::TYPE_DEF, 9), "Example", "Glue")
                            .with_member(MemberKind::Method, method(9, "glue", "()V")),
                    ],
                }],
            },
        ],
    }
}
