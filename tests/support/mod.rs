#![allow(dead_code)]

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Wraps catalog entries in an OpenSCENARIO document.
pub fn catalog_document(catalog_name: &str, entries: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<OpenSCENARIO>
  <FileHeader revMajor="1" revMinor="0" date="2020-03-20T12:00:00" description="{catalog_name}" author="fixtures"/>
  <Catalog name="{catalog_name}">
{entries}
  </Catalog>
</OpenSCENARIO>
"#
    )
}

/// Writes `<dir>/<catalog_name>.xosc` and returns its path.
pub fn write_catalog(dir: &Path, catalog_name: &str, entries: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{catalog_name}.xosc"));
    std::fs::write(&path, catalog_document(catalog_name, entries))
        .with_context(|| format!("writing fixture {}", path.display()))?;
    Ok(path)
}

/// A passenger car entry with the attribute values the suite asserts on.
pub fn car(name: &str) -> String {
    format!(
        r#"    <Vehicle name="{name}" vehicleCategory="car">
      <ParameterDeclarations>
        <ParameterDeclaration name="MaxSpeed" parameterType="double" value="69"/>
        <ParameterDeclaration name="Color" parameterType="string" value="white"/>
        <ParameterDeclaration name="MaxSpeed" parameterType="double" value="$Override"/>
      </ParameterDeclarations>
      <BoundingBox>
        <Center x="1.4" y="0.0" z="0.9"/>
        <Dimensions width="2.0" length="5.0" height="1.8"/>
      </BoundingBox>
      <Performance maxSpeed="69" maxAcceleration="10" maxDeceleration="10"/>
      <Axles>
        <FrontAxle maxSteering="0.5" wheelDiameter="0.8" trackWidth="1.68" positionX="2.98" positionZ="0.4"/>
        <RearAxle maxSteering="0.0" wheelDiameter="0.8" trackWidth="1.68" positionX="0.0" positionZ="0.4"/>
      </Axles>
      <Properties>
        <Property name="model_id" value="0"/>
        <File filepath="../models/car_white.osgb"/>
        <Property name="model_id" value="1"/>
      </Properties>
    </Vehicle>
"#
    )
}

pub fn pedestrian(name: &str, category: &str) -> String {
    format!(
        r#"    <Pedestrian name="{name}" model="{name}_model" mass="80.5" pedestrianCategory="{category}">
      <BoundingBox>
        <Center x="0.06" y="0.0" z="0.923"/>
        <Dimensions width="0.5" length="0.6" height="1.8"/>
      </BoundingBox>
      <Properties/>
    </Pedestrian>
"#
    )
}

pub fn catalog_entry_command(catalog_dir: Option<&Path>) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-entry"));
    cmd.env_remove("RUST_LOG").env_remove("XOSC_CATALOG_DIR");
    if let Some(dir) = catalog_dir {
        cmd.arg("--catalog-dir").arg(dir);
    }
    cmd
}

pub fn run(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}
