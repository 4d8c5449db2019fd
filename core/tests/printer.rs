use streamgen_core::syntax::printer::string_literal;
use streamgen_core::syntax::{
    ClassDecl, ClassName, Expr, ImportScope, JavaFile, MethodDecl, Modifier, Stmt, TypeName, is_identifier,
    is_package_name,
};

fn class_with(package: &str, body: Vec<Stmt>) -> ClassDecl {
    ClassDecl {
        package: package.to_string(),
        name: "Sample".to_string(),
        modifiers: vec![Modifier::Public],
        superclass: None,
        methods: vec![MethodDecl {
            name: "run".to_string(),
            annotations: vec![ClassName::new("java.lang", "Override")],
            modifiers: vec![Modifier::Public],
            returns: TypeName::Void,
            params: vec![],
            body,
        }],
    }
}

#[test]
fn file_imports_are_sorted_and_names_shortened() {
    let list = ClassName::new("java.util", "List");
    let array_list = ClassName::new("java.util", "ArrayList");
    let helper = ClassName::new("org.example", "Helper");
    let body = vec![
        Stmt::local(
            TypeName::parameterized(list, vec![TypeName::STRING]),
            "xs",
            Expr::new_instance(TypeName::parameterized(array_list, vec![TypeName::STRING]), vec![]),
        ),
        Stmt::Expr(Expr::invoke_static(helper, "fill", vec![Expr::name("xs")])),
    ];
    let file = JavaFile::new(class_with("org.example.app", body));

    let expected = "package org.example.app;\n\nimport java.util.ArrayList;\nimport java.util.List;\nimport org.example.Helper;\n\npublic class Sample {\n  @Override\n  public void run() {\n    List<String> xs = new ArrayList<String>();\n    Helper.fill(xs);\n  }\n}\n";
    assert_eq!(file.render(), expected);
}

#[test]
fn clashing_simple_names_stay_qualified() {
    let a = ClassName::new("org.one", "Item");
    let b = ClassName::new("org.two", "Item");
    let body = vec![
        Stmt::local(a.clone(), "x", Expr::new_instance(a, vec![])),
        Stmt::local(b.clone(), "y", Expr::new_instance(b, vec![])),
    ];
    let class = class_with("p", body);
    let scope = ImportScope::for_class(&class);
    assert!(scope.imports().is_empty());

    let text = JavaFile::new(class).render();
    assert!(text.contains("org.one.Item x = new org.one.Item();"));
    assert!(text.contains("org.two.Item y = new org.two.Item();"));
}

#[test]
fn same_package_classes_are_not_imported() {
    let sibling = ClassName::new("p", "Config");
    let body = vec![Stmt::Return(Some(Expr::field(sibling, "PORT")))];
    let file = JavaFile::new(class_with("p", body)).with_file_comment("generated");

    let text = file.render();
    assert!(text.starts_with("// generated\npackage p;\n\npublic class Sample {\n"));
    assert!(text.contains("return Config.PORT;"));
    assert_eq!(file.relative_path(), std::path::PathBuf::from("p/Sample.java"));
}

#[test]
fn display_is_fully_qualified() {
    let class = class_with("p", vec![Stmt::Expr(Expr::invoke_static(ClassName::new("q", "Util"), "go", vec![]))]);
    assert_eq!(
        class.to_string(),
        "public class Sample {\n  @java.lang.Override\n  public void run() {\n    q.Util.go();\n  }\n}\n"
    );
}

#[test]
fn string_literals_are_escaped() {
    assert_eq!(string_literal("plain"), "\"plain\"");
    assert_eq!(string_literal("a \"b\" \\ c\n"), "\"a \\\"b\\\" \\\\ c\\n\"");
}

#[test]
fn identifiers_and_packages() {
    assert!(is_identifier("mappingFirst"));
    assert!(is_identifier("_x$1"));
    assert!(!is_identifier("1abc"));
    assert!(!is_identifier("new"));
    assert!(!is_identifier("a-b"));
    assert!(is_package_name(""));
    assert!(is_package_name("de.fzi.cep"));
    assert!(!is_package_name("de..fzi"));
    assert_eq!(ClassName::parse("java.util.List"), Some(ClassName::new("java.util", "List")));
    assert_eq!(ClassName::parse("java.1util.List"), None);
}
