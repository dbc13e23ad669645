//! End-to-end rendering scenarios.
//!
//! Run `cargo insta review` to update inline snapshots when making
//! intentional changes.

use std::str::FromStr;

use phpgen_model::{ClassLike, Function, Method, Namespace, Parameter, PhpFile, Property, Value};
use phpgen_printer::{Indent, Printer, PrinterConfig, Verbatim};

fn psr_printer() -> Printer {
    Printer::new(PrinterConfig::default().indent(Indent::PSR))
}

fn render_document(model: &str) -> String {
    let file = PhpFile::from_str(model).expect("Failed to parse model");
    psr_printer().render_file(&file).expect("Failed to render")
}

#[test]
fn test_point_class() {
    let class = ClassLike::class("Point")
        .property(Property::new("x"))
        .property(Property::new("y"))
        .method(Method::new("distanceTo").public().param(Parameter::new("other")));

    let code = psr_printer().render_class_like(&class, &Verbatim).unwrap();
    insta::assert_snapshot!(code.trim_end(), @r"
class Point
{
    public $x;
    public $y;

    public function distanceTo($other)
    {
    }
}
");
}

#[test]
fn test_long_parameter_list_wraps() {
    let function = Function::new("createReservation")
        .param(Parameter::new("customerName").type_hint("string"))
        .param(Parameter::new("customerEmail").type_hint("string"))
        .param(Parameter::new("arrivalDate").type_hint("DateTimeImmutable"))
        .param(Parameter::new("departureDate").type_hint("DateTimeImmutable"))
        .param(Parameter::new("guests").type_hint("int").default_value(1))
        .param(Parameter::new("notes").type_hint("string").nullable().default_value(Value::Null))
        .returns("Reservation")
        .body("return new Reservation();");

    let code = psr_printer().render_function(&function, &Verbatim).unwrap();
    insta::assert_snapshot!(code, @r"
function createReservation(
    string $customerName,
    string $customerEmail,
    DateTimeImmutable $arrivalDate,
    DateTimeImmutable $departureDate,
    int $guests = 1,
    ?string $notes = null
): Reservation {
    return new Reservation();
}
");
}

#[test]
fn test_short_parameter_list_stays_inline() {
    let function = Function::new("add")
        .param(Parameter::new("a"))
        .param(Parameter::new("b"))
        .body("return $a + $b;");

    let code = psr_printer().render_function(&function, &Verbatim).unwrap();
    assert_eq!(code, "function add($a, $b) {\n    return $a + $b;\n}");
}

#[test]
fn test_full_document() {
    let code = render_document(
        r#"
        comment = "This file is generated."

        [[namespaces]]
        name = "App\\Model"
        uses = { Carbon = "Carbon\\Carbon", Base = "App\\Model\\Entity" }

        [[namespaces.classes]]
        name = "Event"
        final = true
        extends = ["App\\Model\\Entity"]
        implements = ["JsonSerializable"]
        comment = "A calendar event."

        [[namespaces.classes.constants]]
        name = "KIND"
        value = "event"
        visibility = "public"

        [[namespaces.classes.properties]]
        name = "startsAt"
        visibility = "private"
        comment = "@var Carbon"

        [[namespaces.classes.methods]]
        name = "startsAt"
        visibility = "public"
        return_type = "Carbon\\Carbon"
        body = "return $this->startsAt;"

        [[namespaces.classes.methods]]
        name = "jsonSerialize"
        visibility = "public"
        return_type = "array"
        body = "return ['startsAt' => $this->startsAt];"

        [[namespaces.functions]]
        name = "event"
        return_type = "App\\Model\\Event"
        body = "return new Event();"
        "#,
    );

    insta::assert_snapshot!(code.trim_end(), @r"
<?php

/**
 * This file is generated.
 */

namespace App\Model;

use Carbon\Carbon;

/**
 * A calendar event.
 */
final class Event extends Base implements \JsonSerializable
{
    public const KIND = 'event';

    /** @var Carbon */
    private $startsAt;

    public function startsAt(): Carbon
    {
        return $this->startsAt;
    }

    public function jsonSerialize(): array
    {
        return ['startsAt' => $this->startsAt];
    }
}

function event(): Event {
    return new Event();
}
");
}

#[test]
fn test_document_interface_and_default_values() {
    let code = render_document(
        r#"
        [[namespaces]]
        name = "App"

        [[namespaces.classes]]
        name = "Cache"
        kind = "interface"

        [[namespaces.classes.methods]]
        name = "get"
        visibility = "public"

        [[namespaces.classes.methods.params]]
        name = "key"
        type = "string"

        [[namespaces.classes.methods.params]]
        name = "fallback"
        default = { "@php" = "self::MISSING" }

        [[namespaces.classes.methods]]
        name = "tags"
        visibility = "public"
        return_type = "array"
        "#,
    );

    assert_eq!(
        code,
        "<?php\n\nnamespace App;\n\ninterface Cache\n{\n    public function get(string $key, $fallback = self::MISSING);\n\n    public function tags(): array;\n}\n"
    );
}

#[test]
fn test_multiple_namespaces_in_one_file() {
    let file = PhpFile::new()
        .add_namespace(
            Namespace::new("App\\Contracts").add_class(ClassLike::interface("Greeter")),
        )
        .add_namespace(
            Namespace::new("App")
                .add_use("App\\Contracts\\Greeter")
                .add_class(ClassLike::class("Hello").implements("App\\Contracts\\Greeter")),
        );

    let code = psr_printer().render_file(&file).unwrap();
    assert_eq!(
        code,
        "<?php\n\nnamespace App\\Contracts;\n\ninterface Greeter\n{\n}\n\nnamespace App;\n\nuse App\\Contracts\\Greeter;\n\nclass Hello implements Greeter\n{\n}\n"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let model = r#"
        [[namespaces]]
        name = "App"
        uses = { Z = "Vendor\\Z", A = "Vendor\\A" }

        [[namespaces.classes]]
        name = "Thing"

        [[namespaces.classes.properties]]
        name = "map"
        value = { zeta = 1, alpha = 2 }
        "#;

    let first = render_document(model);
    let second = render_document(model);
    assert_eq!(first, second);

    // Import and map key order follow the document.
    assert!(first.contains("use Vendor\\Z;\nuse Vendor\\A;"));
    assert!(first.contains("public $map = ['zeta' => 1, 'alpha' => 2];"));
}

#[test]
fn test_tab_and_space_indent_differ_only_in_indentation() {
    let file = PhpFile::new().add_namespace(
        Namespace::new("App").add_class(
            ClassLike::class("A").method(Method::new("f").public().body("if (true) {\n    return;\n}")),
        ),
    );

    let tabs = Printer::default().render_file(&file).unwrap();
    let spaces = psr_printer().render_file(&file).unwrap();
    assert_eq!(tabs.replace('\t', "    "), spaces);
}
