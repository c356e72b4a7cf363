use super::compile_bindings;
use crate::descriptor::FileUnit;
use crate::error::PassError;
use crate::naming;
use askama::Template;

/// One `<Service>Desc` block.
struct ServiceView {
    name: String,
    /// `<Service>Desc`
    desc: String,
    /// tonic module holding the service trait (`greeter_server`)
    server_mod: String,
    /// tonic server wrapper type (`GreeterServer`)
    server_type: String,
    blob: String,
    bindings: Vec<BindingView>,
}

/// One registered HTTP handler.
struct BindingView {
    method: String,
    /// Service trait method (`hello`)
    rpc: String,
    request_type: String,
    /// Associated constant of `http::Method` (`GET`)
    verb: String,
    pattern: String,
    unmarshal: String,
}

#[derive(Template)]
#[template(path = "registration.rs.txt", escape = "none")]
struct RegistrationTemplate {
    services: Vec<ServiceView>,
}

pub(super) fn render(unit: &FileUnit) -> Result<String, PassError> {
    let blob = naming::blob_name(&unit.name);
    let mut services = Vec::with_capacity(unit.services.len());
    for svc in &unit.services {
        let mut bindings = Vec::new();
        for method in &svc.methods {
            for compiled in compile_bindings(svc, method)? {
                bindings.push(BindingView {
                    method: method.name.clone(),
                    rpc: naming::rust_ident(&naming::to_snake_case(&method.name)),
                    request_type: method.request_type.clone(),
                    verb: compiled.verb.as_str().to_string(),
                    pattern: naming::pattern_symbol(&svc.name, &method.name, compiled.index),
                    unmarshal: naming::unmarshal_symbol(&svc.name, &method.name, compiled.index),
                });
            }
        }
        services.push(ServiceView {
            name: svc.name.clone(),
            desc: format!("{}Desc", svc.name),
            server_mod: format!("{}_server", naming::to_snake_case(&svc.name)),
            server_type: format!("{}Server", svc.name),
            blob: blob.clone(),
            bindings,
        });
    }
    Ok(RegistrationTemplate { services }.render()?)
}
