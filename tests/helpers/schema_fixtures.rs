//! A two-document fleet schema.
//!
//! `common.xsd` declares parties and addresses; `fleet.xsd` declares the
//! fleet, its abstract `vehicle` head with `car` and `truck` members, and a
//! self-referencing `part`. Walking `fleet` enters 21 elements:
//!
//! ```text
//! fleet
//!   owner: name, address (street, city, zip)
//!   car:   plate, service (part: partName, part*), seats
//!   truck: plate, service (part: partName, part*), axles
//! ```
//!
//! `*` marks a recursive occurrence reported as previously visited.

use once_cell::sync::Lazy;
use xmlschema_walker::schema::{
    AttributeDecl, ComplexType, ElementDecl, MaxOccurs, NamespaceConstraint, Particle,
    ProcessContents, SchemaBuilder, SchemaCollection, TypeRef, Wildcard,
};
use xmlschema_walker::QName;

pub const FLEET_NS: &str = "urn:fleet";

pub static FLEET: Lazy<SchemaCollection> = Lazy::new(fleet_schema);

pub fn fleet(local: &str) -> QName {
    QName::new(FLEET_NS, local)
}

fn string() -> TypeRef {
    TypeRef::builtin("string")
}

fn fleet_schema() -> SchemaCollection {
    let mut b = SchemaBuilder::new(Some(FLEET_NS), "common.xsd");

    // common.xsd
    let street = b.local_element(ElementDecl::new(fleet("street")).with_type(string()).at(5, 8));
    let city = b.local_element(ElementDecl::new(fleet("city")).with_type(string()).at(6, 8));
    let zip = b.local_element(ElementDecl::new(fleet("zip")).with_type(string()).at(7, 8));
    b.complex_type(
        fleet("AddressType"),
        ComplexType::new()
            .with_particle(Particle::sequence(vec![
                Particle::element(street),
                Particle::element(city),
                Particle::element(zip),
            ]))
            .with_attribute(AttributeDecl::new(QName::local("country")).with_type(string())),
    );

    let name = b.local_element(ElementDecl::new(fleet("name")).with_type(string()).at(12, 8));
    let address = b.local_element(
        ElementDecl::new(fleet("address"))
            .with_type(fleet("AddressType"))
            .at(13, 8),
    );
    b.complex_type(
        fleet("PartyType"),
        ComplexType::new().with_particle(Particle::sequence(vec![
            Particle::element(name),
            Particle::element(address),
        ])),
    );
    b.element(ElementDecl::new(fleet("owner")).with_type(fleet("PartyType")).at(16, 4));

    // fleet.xsd
    b.schema(Some(FLEET_NS), "fleet.xsd");

    let part_name = b.local_element(
        ElementDecl::new(fleet("partName"))
            .with_type(TypeRef::builtin("token"))
            .at(5, 8),
    );
    b.complex_type(
        fleet("PartType"),
        ComplexType::new()
            .with_particle(Particle::sequence(vec![
                Particle::element(part_name),
                Particle::element_ref(fleet("part")).with_occurs(0, MaxOccurs::Unbounded),
            ]))
            .with_any_attribute(
                Wildcard::new(NamespaceConstraint::Other(FLEET_NS.into()))
                    .with_process_contents(ProcessContents::Lax),
            ),
    );
    b.element(ElementDecl::new(fleet("part")).with_type(fleet("PartType")).at(3, 4));

    b.complex_type(
        fleet("ServiceType"),
        ComplexType::new().with_particle(Particle::sequence(vec![Particle::element_ref(
            fleet("part"),
        )])),
    );

    let plate = b.local_element(ElementDecl::new(fleet("plate")).with_type(string()).at(17, 8));
    let service = b.local_element(
        ElementDecl::new(fleet("service"))
            .with_type(fleet("ServiceType"))
            .at(18, 8),
    );
    b.complex_type(
        fleet("VehicleType"),
        ComplexType::new()
            .with_particle(Particle::sequence(vec![
                Particle::element(plate),
                Particle::element(service).with_occurs(0, MaxOccurs::Unbounded),
            ]))
            .with_attribute(AttributeDecl::new(QName::local("vin")).with_type(string()).required()),
    );
    b.element(
        ElementDecl::new(fleet("vehicle"))
            .with_type(fleet("VehicleType"))
            .abstract_()
            .at(22, 4),
    );

    let seats = b.local_element(
        ElementDecl::new(fleet("seats"))
            .with_type(TypeRef::builtin("positiveInteger"))
            .at(27, 12),
    );
    b.complex_type(
        fleet("CarType"),
        ComplexType::new()
            .extending(fleet("VehicleType"))
            .with_particle(Particle::sequence(vec![Particle::element(seats)])),
    );
    let axles = b.local_element(
        ElementDecl::new(fleet("axles"))
            .with_type(TypeRef::builtin("positiveInteger"))
            .at(35, 12),
    );
    b.complex_type(
        fleet("TruckType"),
        ComplexType::new()
            .extending(fleet("VehicleType"))
            .with_particle(Particle::sequence(vec![Particle::element(axles)])),
    );
    b.element(
        ElementDecl::new(fleet("car"))
            .with_type(fleet("CarType"))
            .with_substitution_group(fleet("vehicle"))
            .at(40, 4),
    );
    b.element(
        ElementDecl::new(fleet("truck"))
            .with_type(fleet("TruckType"))
            .with_substitution_group(fleet("vehicle"))
            .at(41, 4),
    );

    b.complex_type(
        fleet("FleetType"),
        ComplexType::new()
            .with_particle(Particle::sequence(vec![
                Particle::element_ref(fleet("owner")),
                Particle::element_ref(fleet("vehicle")).with_occurs(0, MaxOccurs::Unbounded),
            ]))
            .with_attribute(AttributeDecl::new(QName::local("name")).with_type(string()).required()),
    );
    b.element(ElementDecl::new(fleet("fleet")).with_type(fleet("FleetType")).at(50, 4));

    match b.build() {
        Ok(schemas) => schemas,
        Err(error) => panic!("Fleet fixture failed to build: {error}"),
    }
}
