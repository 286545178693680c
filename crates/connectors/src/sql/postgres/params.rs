use model::core::value::Value;
use tokio_postgres::types::ToSql;

pub struct PgParam(Box<dyn ToSql + Sync + Send>);

impl PgParam {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Int(v) => PgParam(Box::new(v)),
            Value::String(v) => PgParam(Box::new(v)),
            Value::Null => PgParam(Box::new(Option::<String>::None)),
        }
    }
}

impl AsRef<dyn ToSql + Sync> for PgParam {
    fn as_ref(&self) -> &(dyn ToSql + Sync + 'static) {
        &*self.0
    }
}

pub struct PgParamStore {
    pub params: Vec<PgParam>,
}

impl PgParamStore {
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            params: values.into_iter().map(PgParam::from_value).collect(),
        }
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|param| param.as_ref())
            .collect::<Vec<_>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use tokio_postgres::types::{IsNull, Type};

    fn encode(param: &PgParam, ty: &Type) -> (IsNull, Vec<u8>) {
        let mut buf = BytesMut::new();
        let is_null = param.as_ref().to_sql_checked(ty, &mut buf).unwrap();
        (is_null, buf.to_vec())
    }

    #[test]
    fn test_string_param_encodes_as_text() {
        let param = PgParam::from_value(Value::from("USA"));
        let (is_null, bytes) = encode(&param, &Type::TEXT);
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(bytes, b"USA");
    }

    #[test]
    fn test_null_param_encodes_as_null() {
        let param = PgParam::from_value(Value::Null);
        let (is_null, _) = encode(&param, &Type::TEXT);
        assert!(matches!(is_null, IsNull::Yes));
    }

    #[test]
    fn test_store_keeps_parameter_order() {
        let store = PgParamStore::from_values(vec![
            Value::from("USA"),
            Value::from("John"),
            Value::from("Doe"),
            Value::from("Male"),
        ]);
        assert_eq!(store.as_refs().len(), 4);
    }
}
