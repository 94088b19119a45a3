//! Instance documents for the fleet schema.

pub const ROOT_ONLY: &str = r#"<fleet xmlns="urn:fleet" name="north"/>"#;

pub const WITH_CHILDREN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<fleet xmlns="urn:fleet" name="north">
  <owner/>
  <car vin="WVW-001"/>
  <!-- parked -->
  <truck vin="MAN-042">on loan</truck>
</fleet>
"#;

pub const WITH_GRANDCHILDREN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<f:fleet xmlns:f="urn:fleet" xmlns:x="urn:extra" name="north" x:region="EU">
  <f:owner>
    <f:name>Nordic &amp; Sons</f:name>
    <f:address country="NO">
      <f:street>Kaigata 1</f:street>
      <f:city><![CDATA[Bergen]]> sentrum</f:city>
      <f:zip>5016</f:zip>
    </f:address>
  </f:owner>
  <f:car vin="WVW-001">
    <f:plate>EL 12345</f:plate>
    <f:service>
      <f:part x:batch="7">
        <f:partName>brake pad</f:partName>
        <f:part><f:partName>rivet</f:partName></f:part>
      </f:part>
    </f:service>
    <f:seats>5</f:seats>
  </f:car>
</f:fleet>
"#;

/// Every fixture with its system id.
pub const ALL: [(&str, &str); 3] = [
    ("root-only.xml", ROOT_ONLY),
    ("with-children.xml", WITH_CHILDREN),
    ("with-grandchildren.xml", WITH_GRANDCHILDREN),
];
