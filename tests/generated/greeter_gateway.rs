// Code generated by gatewaygen. DO NOT EDIT.
// source: greeter/v1/greeter.proto
// package: greeter.v1

use std::sync::Arc;

use gatewaygen::runtime;
use super::pb::greeter_server;
use super::pb::*;

// Fails to compile against an incompatible runtime.
const _: () = runtime::IS_VERSION_1;
#[allow(dead_code)]
type _GatewayRouter = dyn runtime::Router;
#[allow(dead_code)]
type _GatewayCodec = runtime::Codec;

/// gRPC and JSON/HTTP registration for `Greeter`.
pub struct GreeterDesc<S> {
    svc: Arc<S>,
}

impl<S> GreeterDesc<S>
where
    S: greeter_server::Greeter,
{
    pub fn new(svc: S) -> Self {
        Self { svc: Arc::new(svc) }
    }

    pub fn from_arc(svc: Arc<S>) -> Self {
        Self { svc }
    }

    /// Add the gRPC service to a tonic routes builder.
    pub fn register_grpc(&self, routes: &mut tonic::service::RoutesBuilder) {
        routes.add_service(greeter_server::GreeterServer::from_arc(Arc::clone(&self.svc)));
    }

    /// Embedded API documentation.
    pub fn api_doc(&self) -> &'static [u8] {
        api_doc_greeter_v1_greeter_proto
    }

    /// Register one HTTP handler per binding, in declaration order.
    #[allow(unused_variables)]
    pub fn register_http(&self, mux: &mut dyn runtime::Router) {
        // Greeter.Hello
        {
            let svc = Arc::clone(&self.svc);
            let handler: runtime::Handler = Arc::new(move |req: runtime::Request| {
                let svc = Arc::clone(&svc);
                Box::pin(async move {
                    let mut msg = HelloRequest::default();
                    if let Err(err) = unmarshal_gateway_Greeter_Hello_0(&req, &mut msg) {
                        return runtime::set_error(&req, runtime::GatewayError::wrap(err, "couldn't parse request"));
                    }

                    let rpc = runtime::rpc_request(&req, msg);
                    let ret = match svc.hello(rpc).await {
                        Ok(resp) => resp.into_inner(),
                        Err(status) => {
                            return runtime::set_error(&req, runtime::GatewayError::wrap(status, "returned from handler"));
                        }
                    };

                    let (_, outbound) = runtime::codec_for_request(&req);
                    let mut resp = runtime::Response::new(Vec::new());
                    resp.headers_mut().insert(
                        runtime::CONTENT_TYPE,
                        runtime::HeaderValue::from_static(outbound.content_type()),
                    );
                    if let Err(err) = outbound.encode_into(resp.body_mut(), &ret) {
                        return runtime::set_error(&req, runtime::GatewayError::wrap(err, "couldn't write response"));
                    }
                    resp
                }) as runtime::HandlerFuture
            });
            mux.method_func(runtime::Method::GET, pattern_gateway_Greeter_Hello_0, handler);
        }
        // Greeter.Hello
        {
            let svc = Arc::clone(&self.svc);
            let handler: runtime::Handler = Arc::new(move |req: runtime::Request| {
                let svc = Arc::clone(&svc);
                Box::pin(async move {
                    let mut msg = HelloRequest::default();
                    if let Err(err) = unmarshal_gateway_Greeter_Hello_1(&req, &mut msg) {
                        return runtime::set_error(&req, runtime::GatewayError::wrap(err, "couldn't parse request"));
                    }

                    let rpc = runtime::rpc_request(&req, msg);
                    let ret = match svc.hello(rpc).await {
                        Ok(resp) => resp.into_inner(),
                        Err(status) => {
                            return runtime::set_error(&req, runtime::GatewayError::wrap(status, "returned from handler"));
                        }
                    };

                    let (_, outbound) = runtime::codec_for_request(&req);
                    let mut resp = runtime::Response::new(Vec::new());
                    resp.headers_mut().insert(
                        runtime::CONTENT_TYPE,
                        runtime::HeaderValue::from_static(outbound.content_type()),
                    );
                    if let Err(err) = outbound.encode_into(resp.body_mut(), &ret) {
                        return runtime::set_error(&req, runtime::GatewayError::wrap(err, "couldn't write response"));
                    }
                    resp
                }) as runtime::HandlerFuture
            });
            mux.method_func(runtime::Method::POST, pattern_gateway_Greeter_Hello_1, handler);
        }
    }
}

/// API documentation for `greeter/v1/greeter.proto`.
#[allow(non_upper_case_globals)]
pub static api_doc_greeter_v1_greeter_proto: &[u8] = concat!(r"{
  ", "\"", r"swagger", "\"", r": ", "\"", r"2.0", "\"", r",
  ", "\"", r"info", "\"", r": {
    ", "\"", r"title", "\"", r": ", "\"", r"greeter/v1/greeter.proto", "\"", r",
    ", "\"", r"description", "\"", r": ", "\"", r"Say `hi` with \", "\"", r"quotes\", "\"", r" and a C:\\path", "\"", r"
  },
  ", "\"", r"paths", "\"", r": {
    ", "\"", r"/v1/hello/{name}", "\"", r": { ", "\"", r"get", "\"", r": { ", "\"", r"operationId", "\"", r": ", "\"", r"Greeter_Hello", "\"", r" } },
    ", "\"", r"/v1/hello", "\"", r": { ", "\"", r"post", "\"", r": { ", "\"", r"operationId", "\"", r": ", "\"", r"Greeter_Hello2", "\"", r" } }
  }
}
").as_bytes();

#[allow(non_upper_case_globals)]
pub const pattern_gateway_Greeter_Hello_0: &str = "/v1/hello/{name}";

#[allow(non_snake_case)]
fn unmarshal_gateway_Greeter_Hello_0(req: &runtime::Request, msg: &mut HelloRequest) -> Result<(), runtime::GatewayError> {
    let Some(params) = runtime::RouteParams::from_request(req) else {
        panic!("only routers attaching runtime::RouteParams to the request are supported");
    };
    for (key, value) in params.iter() {
        match key {
            "name" => { msg.name = runtime::coerce::string(value).map_err(|err| runtime::GatewayError::wrap(err, "path parameter name"))?; }
            _ => {}
        }
    }
    Ok(())
}

#[allow(non_upper_case_globals)]
pub const pattern_gateway_Greeter_Hello_1: &str = "/v1/hello";

#[allow(non_snake_case)]
fn unmarshal_gateway_Greeter_Hello_1(req: &runtime::Request, msg: &mut HelloRequest) -> Result<(), runtime::GatewayError> {
    let (inbound, _) = runtime::codec_for_request(req);
    inbound
        .decode_into(req.body(), msg)
        .map_err(|err| runtime::GatewayError::wrap(err, "couldn't read request body"))?;
    Ok(())
}
